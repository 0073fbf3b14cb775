use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::error::{Error, Result};
use crate::page::DashboardView;
use crate::views::ViewMode;

#[derive(Parser, Debug)]
#[command(name = "sim-dash")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the dashboard from a snapshot file
    Render {
        #[arg(long)]
        state: PathBuf,
        #[arg(long, value_enum, default_value = "page")]
        view: ViewArg,
        #[arg(long, value_enum, default_value = "human")]
        format: FormatArg,
        #[arg(long, help = "Detailed monitor mode (last attack/defense details)")]
        detailed: bool,
        #[arg(long, help = "Scenario id to mark as selected on the scenario page")]
        select: Option<String>,
    },
    /// Print the parsed snapshot inventory
    ShowState {
        #[arg(long)]
        state: PathBuf,
    },
    /// List the supported view names
    ListViews,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum ViewArg {
    Page,
    Scenarios,
    Controls,
    Monitor,
    Log,
    Results,
}

impl From<ViewArg> for DashboardView {
    fn from(value: ViewArg) -> Self {
        match value {
            ViewArg::Page => DashboardView::Page,
            ViewArg::Scenarios => DashboardView::Scenarios,
            ViewArg::Controls => DashboardView::Controls,
            ViewArg::Monitor => DashboardView::Monitor,
            ViewArg::Log => DashboardView::Log,
            ViewArg::Results => DashboardView::Results,
        }
    }
}

#[derive(ValueEnum, Clone, Debug)]
pub enum FormatArg {
    Human,
    Summary,
    Json,
}

pub fn view_mode(detailed: bool) -> ViewMode {
    if detailed {
        ViewMode::Detailed
    } else {
        ViewMode::Overview
    }
}

pub fn parse_args() -> Result<Args> {
    Args::try_parse().map_err(|e| Error::Cli(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_args_parse_with_defaults() {
        let args = Args::try_parse_from([
            "sim-dash",
            "render",
            "--state",
            "snapshot.toml",
        ])
        .expect("args should parse");
        match args.command {
            Command::Render {
                state,
                view,
                format,
                detailed,
                select,
            } => {
                assert_eq!(state, PathBuf::from("snapshot.toml"));
                assert!(matches!(view, ViewArg::Page));
                assert!(matches!(format, FormatArg::Human));
                assert!(!detailed);
                assert!(select.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn render_args_accept_view_and_format() {
        let args = Args::try_parse_from([
            "sim-dash",
            "render",
            "--state",
            "snapshot.json",
            "--view",
            "monitor",
            "--format",
            "json",
            "--detailed",
            "--select",
            "s1",
        ])
        .expect("args should parse");
        match args.command {
            Command::Render {
                view,
                format,
                detailed,
                select,
                ..
            } => {
                assert!(matches!(view, ViewArg::Monitor));
                assert!(matches!(format, FormatArg::Json));
                assert!(detailed);
                assert_eq!(select.as_deref(), Some("s1"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn invalid_view_value_is_rejected() {
        let result = Args::try_parse_from([
            "sim-dash",
            "render",
            "--state",
            "snapshot.toml",
            "--view",
            "chart",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn view_mode_maps_detailed_flag() {
        assert_eq!(view_mode(false), ViewMode::Overview);
        assert_eq!(view_mode(true), ViewMode::Detailed);
    }
}
