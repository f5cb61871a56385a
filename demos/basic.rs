use probskip::{SkipListOptions, utils::logging};

fn main() {
    logging::init();

    let mut list = SkipListOptions::new()
        .probability(0.5)
        .max_level(3)
        .seed(2024)
        .build()
        .expect("build skip list failed");

    for key in [10, 20, 5] {
        list.insert(key).expect("insert failed");
    }
    print!("{list}");
    println!("keys: {:?}", list.to_ordered_keys());
    println!("level of 5: {:?}", list.level_of(5).expect("bad key"));

    list.delete(10).expect("delete failed");
    println!("after delete 10: {:?}", list.to_ordered_keys());

    if let Err(err) = list.insert(1.5) {
        println!("rejected: {err}");
    }
}
