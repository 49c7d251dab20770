//! Interactive session.

use std::io::Write;
use std::sync::Arc;

use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use linkroom_core::error::AppError;
use linkroom_core::types::RoomCode;
use linkroom_view::{LandingController, PageLocation, Screen, Session};

use crate::output;
use crate::system::{self, SystemClipboard};
use crate::terminal::{Input, TerminalView, parse_input};

/// Arguments for the interactive session
#[derive(Debug, Default, Args)]
pub struct OpenArgs {
    /// Page address to start from (overrides `view.page_url`)
    #[arg(long)]
    pub page: Option<String>,

    /// Room to open right away
    #[arg(long)]
    pub room: Option<String>,
}

/// Run the interactive session until `quit` or end of input
pub async fn execute(args: &OpenArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let view = Arc::new(TerminalView::new());
    let session = Session::start(&config, view.clone(), Arc::new(SystemClipboard)).await?;

    let mut page = match &args.page {
        Some(raw) => PageLocation::parse(raw)?,
        None => session.home()?,
    };
    if let Some(room) = &args.room {
        page = page.with_room(&RoomCode::parse(room)?);
    }

    let mut screen = session.load(&page).await;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt();
        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            break;
        };

        match parse_input(&line) {
            Input::Blank => {}
            Input::Help => view.print_help(),
            Input::Quit => break,
            Input::Invalid(usage) => output::print_error(&usage),
            Input::Name(name) => {
                if let Err(e) = session.set_display_name(&name).await {
                    warn!(error = %e, "Could not save display name");
                    output::print_error("Could not save display name.");
                }
            }
            Input::Create => {
                let next = LandingController::new(page.clone(), view.clone()).create_room();
                page = next;
                screen = session.load(&page).await;
            }
            Input::Join(code) => {
                if let Some(next) = LandingController::new(page.clone(), view.clone()).join_room(&code)
                {
                    page = next;
                    screen = session.load(&page).await;
                }
            }
            input => match &screen {
                Screen::Landing(_) => output::print_error("Create or join a room first."),
                Screen::Room(room) => match input {
                    Input::Send(url) => {
                        let name = session.display_name().await;
                        room.send(&url, &name).await;
                    }
                    Input::Refresh => {
                        view.force_next_render();
                        room.refresh().await;
                    }
                    Input::Copy => {
                        room.copy_room_link().await;
                    }
                    Input::Open(n) => match room.open_link(n - 1) {
                        Some(url) => {
                            if let Err(e) = system::open_url(&url).await {
                                debug!(error = %e, "Opener failed");
                                println!("{}", url);
                            }
                        }
                        None => output::print_error(&format!("No link #{}.", n)),
                    },
                    _ => {}
                },
            },
        }
    }

    if let Screen::Room(room) = &screen {
        room.leave();
    }
    Ok(())
}

fn prompt() {
    write_prompt(&mut std::io::stdout());
}

fn write_prompt(out: &mut impl Write) {
    if let Err(e) = out.write_all(b"> ").and_then(|()| out.flush()) {
        debug!(error = %e, "Could not write prompt");
    }
}
