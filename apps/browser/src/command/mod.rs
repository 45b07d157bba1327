pub mod browse;
pub mod fields;
pub mod search;

use crate::error::Result;

pub use browse::BrowseCommand;
pub use fields::FieldsCommand;
pub use search::SearchCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}
