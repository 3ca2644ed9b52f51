use tantivy::schema::*;

/// Holds field handles for the commit Tantivy schema.
pub struct CommitSchema {
    pub schema: Schema,
    /// Composite `<prefix>-<commit id>` key, used for upserts.
    pub key: Field,
    pub id: Field,
    pub message: Field,
    pub author_name: Field,
    pub author_email: Field,
    pub time: Field,
}

impl CommitSchema {
    pub fn new() -> Self {
        let mut builder = Schema::builder();

        let key = builder.add_text_field("key", STRING | STORED);
        let id = builder.add_text_field("id", STRING | STORED);
        let message = builder.add_text_field("message", TEXT | STORED);
        let author_name = builder.add_text_field("author_name", TEXT | STORED);
        let author_email = builder.add_text_field("author_email", TEXT | STORED);
        let time = builder.add_i64_field("time", INDEXED | STORED | FAST);

        let schema = builder.build();

        Self {
            schema,
            key,
            id,
            message,
            author_name,
            author_email,
            time,
        }
    }

    /// Fields searched by free-text queries.
    pub fn default_search_fields(&self) -> Vec<Field> {
        vec![self.message, self.author_name, self.author_email]
    }
}

impl Default for CommitSchema {
    fn default() -> Self {
        Self::new()
    }
}
