pub mod triangle {
    pub const UP: &str = "▲";
    pub const DOWN: &str = "▼";
}
