#![allow(dead_code)]

use automap::Entity;

#[derive(Entity)]
#[automap(table = "a", table = "b")]
struct Invoice {
    id: i64,
}

fn main() {}
