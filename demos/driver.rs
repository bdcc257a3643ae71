//! Walks through the basic operations of a `DoublingList`, printing the
//! block layout after every step.
//!
//! Run with `cargo run --example driver`.

use doubling_list::{DoublingList, Result};

fn main() -> Result<()> {
    let mut list: DoublingList<&str> = DoublingList::new();
    println!("{}", list.render());

    list.push_back("A")?;
    list.push_back("B")?;
    list.push_back("C")?;
    println!("{}", list.render());

    list.insert(0, "X")?;
    println!("{}", list.render());
    list.insert(2, "Y")?;
    println!("{}", list.render());
    list.insert(1, "Z")?;
    println!("{}", list.render());

    println!("{}", list.remove(2)?);
    println!("{}", list.render());
    println!("{}", list.remove(1)?);
    println!("{}", list.render());

    let mut cursor = list.cursor_mut();
    while cursor.has_next() {
        println!("{}", cursor.render());
        println!("{}", cursor.next()?);
    }
    while cursor.has_previous() {
        println!("{}", cursor.previous()?);
        println!("{}", cursor.render());
    }

    cursor.next()?;
    cursor.add("G")?;
    println!("{}", cursor.render());

    cursor.previous()?;
    cursor.previous()?;
    cursor.remove()?;
    println!("{}", cursor.render());

    Ok(())
}
