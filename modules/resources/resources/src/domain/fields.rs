pub struct ResourceFields;

impl ResourceFields {
    pub const NAME: &'static str = "name";
    pub const DESCRIPTION: &'static str = "description";
    pub const ID: &'static str = "id";
}
