#![allow(dead_code)]

use automap::Entity;

#[derive(Entity)]
struct Invoice {
    #[automap(column = "total_due")]
    total: i64,
}

fn main() {}
