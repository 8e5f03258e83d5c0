pub struct Strikethrough;

impl Strikethrough {
    pub const TILDES: &'static str = "~~";
}
