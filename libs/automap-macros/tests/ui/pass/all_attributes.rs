use automap::{Annotated, AnnotationKind, Entity};

#[derive(Entity)]
#[automap(table = "accounts", schema = "crm")]
#[automap(prefix = "acc_")]
#[allow(dead_code)]
pub struct Account {
    pub id: i64,
    #[automap(map_to = "mail")]
    pub email: String,
    #[automap(ignore)]
    pub session: Option<String>,
}

fn main() {
    let descriptor = Account::descriptor();
    assert_eq!(descriptor.name(), "Account");
    assert_eq!(descriptor.payload(AnnotationKind::TableName), Some("accounts"));
    assert_eq!(descriptor.payload(AnnotationKind::SchemaName), Some("crm"));
    assert_eq!(descriptor.payload(AnnotationKind::ColumnPrefix), Some("acc_"));
    assert_eq!(descriptor.properties().len(), 3);
    assert!(descriptor.properties()[2].has_annotation(AnnotationKind::Ignore));
}
