//! Browser entry point for the portfolio page effects.
//!
//! Build with `wasm-pack build apps/portfolio-web --target web` and load the
//! generated module from the page; `start` runs as soon as it is
//! instantiated.

use folio_platform_web::PortfolioLauncher;

/// Launcher with the settings the page ships with.
pub fn create_launcher() -> PortfolioLauncher {
    PortfolioLauncher::new()
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::create_launcher;
    use folio_platform_web::Portfolio;
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;

    thread_local! {
        static PORTFOLIO: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

        let portfolio = create_launcher().run()?;
        PORTFOLIO.with(|slot| *slot.borrow_mut() = Some(portfolio));
        Ok(())
    }

    /// Stops frame-driven animation, e.g. before the page tears the
    /// effects down.
    #[wasm_bindgen]
    pub fn stop() {
        PORTFOLIO.with(|slot| {
            if let Some(portfolio) = slot.borrow_mut().take() {
                portfolio.stop();
            }
        });
    }
}
