//! Shell event loop.
//!
//! One loop owns the dashboard and waits on two sources: input lines and
//! finished fetches. Fetches run as spawned tasks and report back over a
//! channel, so the prompt stays usable while a search is in flight. Results
//! are applied in the order they arrive; a slow early response can overwrite
//! a fast later one.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, error};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::app::command::{parse_command, ShellCommand, HELP};
use crate::config::EXPORT_FILE_NAME;
use crate::dashboard::Dashboard;
use crate::filters::{AttendanceType, FilterKey};
use crate::models::FetchResult;
use crate::table::render_table;

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct Shell {
    dashboard: Dashboard,
    results_tx: mpsc::UnboundedSender<FetchResult>,
    results_rx: mpsc::UnboundedReceiver<FetchResult>,
    in_flight: usize,
}

impl Shell {
    fn spawn_fetch(&mut self) {
        let pending = self.dashboard.begin_fetch();
        let tx = self.results_tx.clone();
        self.in_flight += 1;
        debug!("Attendance fetch started ({} in flight)", self.in_flight);
        tokio::spawn(async move {
            // The receiver only goes away when the shell has exited.
            let _ = tx.send(pending.await);
        });
    }

    fn apply(&mut self, result: FetchResult) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let result = self.dashboard.finish_fetch(result);
        if !result.success {
            println!("{}", result.message);
        }
        print!("{}", render_table(&result.rows));
    }

    async fn drain(&mut self) {
        while self.in_flight > 0 {
            match self.results_rx.recv().await {
                Some(result) => self.apply(result),
                None => break,
            }
        }
    }

    fn refuse_while_loading(&self) -> bool {
        if self.dashboard.is_loading() {
            println!("Searching... wait for the current search to finish.");
            return true;
        }
        false
    }

    fn select(&mut self, key: FilterKey, value: String) {
        match key {
            FilterKey::AttendanceType => match value.parse::<AttendanceType>() {
                Ok(attendance_type) => self
                    .dashboard
                    .filters_mut()
                    .set_select(key, attendance_type.as_ref()),
                Err(_) => println!("Attendance type must be one of: female, male, child"),
            },
            FilterKey::SpotCode => {
                if self.dashboard.spots().is_none() {
                    println!("Spot list unavailable; spot selection is disabled.");
                } else if !self.dashboard.has_spot(&value) {
                    println!("Unknown spot '{value}' (type `spots` for the list)");
                } else {
                    self.dashboard.filters_mut().set_select(key, value);
                }
            }
            _ => self.dashboard.filters_mut().set_select(key, value),
        }
    }

    fn export(&self, path: Option<PathBuf>) {
        let path = path.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
        match self.dashboard.export(&path) {
            Ok(Some(summary)) => println!(
                "Exported {} row(s) to {}",
                summary.rows,
                summary.path.display()
            ),
            Ok(None) => println!("Nothing to export."),
            Err(e) => error!("{e}"),
        }
    }

    async fn handle(&mut self, command: ShellCommand) -> Flow {
        match command {
            ShellCommand::Set { field, value } => match field.parse::<FilterKey>() {
                Ok(key) if key.is_dropdown() => {
                    println!("{key} is chosen from a list; use `select {key} <value>`")
                }
                _ => {
                    if let Err(e) = self.dashboard.filters_mut().set_text(&field, value) {
                        println!("{e}");
                    }
                }
            },
            ShellCommand::Unset(key) => self.dashboard.filters_mut().unset(key),
            ShellCommand::Select { key, value } => self.select(key, value),
            ShellCommand::Filters => println!("{}", self.dashboard.filters()),
            ShellCommand::Spots => match self.dashboard.spots() {
                None => println!("Spot list unavailable."),
                Some([]) => println!("No spots."),
                Some(_) => {
                    for choice in self.dashboard.spot_choices() {
                        println!("{choice}");
                    }
                }
            },
            ShellCommand::Search => {
                if !self.refuse_while_loading() {
                    self.spawn_fetch();
                    println!("Searching...");
                }
            }
            ShellCommand::Clear => {
                if !self.refuse_while_loading() {
                    self.dashboard.filters_mut().reset();
                    self.spawn_fetch();
                    println!("Filters cleared. Searching...");
                }
            }
            ShellCommand::Table => {
                if self.dashboard.is_loading() {
                    println!("Loading attendance data...");
                }
                print!("{}", render_table(self.dashboard.rows()));
            }
            ShellCommand::Export(path) => self.export(path),
            ShellCommand::Reload => {
                self.dashboard.reset();
                self.spawn_fetch();
                self.dashboard.load_spots().await;
                println!("Reloaded. Searching...");
            }
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }
}

/// Runs the interactive dashboard until `quit`, end of input, or Ctrl-C.
///
/// Starts the initial fetch, loads the spot list meanwhile, then processes input
/// lines. Fetches still in flight when the loop ends are awaited and applied
/// before the dashboard is handed back.
///
/// # Errors
///
/// Returns an error if reading from `input` fails.
pub async fn run_shell<R>(dashboard: Dashboard, input: R) -> Result<Dashboard>
where
    R: AsyncBufRead + Unpin,
{
    let (results_tx, results_rx) = mpsc::unbounded_channel();
    let mut shell = Shell {
        dashboard,
        results_tx,
        results_rx,
        in_flight: 0,
    };

    shell.spawn_fetch();
    shell.dashboard.load_spots().await;
    println!("{HELP}");

    let mut lines = input.lines();
    loop {
        tokio::select! {
            Some(result) = shell.results_rx.recv() => shell.apply(result),
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read shell input")? else {
                    break;
                };
                match parse_command(&line) {
                    Ok(Some(command)) => {
                        if shell.handle(command).await == Flow::Quit {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => println!("{e}"),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    shell.drain().await;
    Ok(shell.dashboard)
}
