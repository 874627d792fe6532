pub mod app;
mod events;
mod ui;

use app::App;
use color_eyre::Result;
use std::sync::Arc;
use user_service::UserApi;

pub async fn run(api: Arc<dyn UserApi>) -> Result<()> {
    let mut app = App::new(api).await;
    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
