//!
//! app.rs
//! Main loop
//!
//!     loop {
//!         terminal.draw(|f| view::render(&app, f))    // draw
//!         if app.should_quit { break }
//!         if let Some(event) = poll_event(100ms) {     // wait for input
//!             let msg = handle_event(event, &app);     // key -> message
//!             update::update(&mut app, &backend, msg)  // message -> new model
//!         }
//!     }
//!

use std::time::Duration;

use anyhow::Result;

use crate::backend::Backend;
use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// Run until the user quits
pub fn run(terminal: &mut Term, app: &mut App, backend: &Backend) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, backend, msg);
        }
    }

    Ok(())
}
