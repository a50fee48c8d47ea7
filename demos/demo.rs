//! Walks a `DynArray` through a few edits, printing its summary after each.
//!
//! Run with `RUST_LOG=trace` to see every reallocation.

use stlkit::DynArray;

fn main() {
    env_logger::init();

    let mut v = DynArray::<i32>::new();
    v.push_back(1);
    print!("{}", v.summary());

    v.push_back(1);
    print!("{}", v.summary());

    v.push_back(1);
    print!("{}", v.summary());

    v.pop_back();
    print!("{}", v.summary());

    println!("v[0]: {}", v[0]);

    match v.at(2) {
        Ok(value) => println!("v[2]: {value}"),
        Err(err) => eprintln!("{err}"),
    }

    println!("Resizing to 10");
    v.resize_default(10);
    print!("{}", v.summary());
}
