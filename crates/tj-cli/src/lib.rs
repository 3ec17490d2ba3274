pub mod input;
pub mod reporters;
pub mod selector;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}
