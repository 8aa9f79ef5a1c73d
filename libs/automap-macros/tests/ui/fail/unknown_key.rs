#![allow(dead_code)]

use automap::Entity;

#[derive(Entity)]
#[automap(tabel = "invoices")]
struct Invoice {
    id: i64,
}

fn main() {}
