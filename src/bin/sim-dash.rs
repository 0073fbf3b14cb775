use sim_dash::cli::{self, Command, FormatArg};
use sim_dash::config;
use sim_dash::error::Result;
use sim_dash::output::{
    write_state_overview, Formatter, HumanFormatter, JsonFormatter, SummaryFormatter,
};
use sim_dash::page::DashboardView;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = cli::parse_args()?;

    match args.command {
        Command::Render {
            state,
            view,
            format,
            detailed,
            select,
        } => {
            let snapshot = config::load_snapshot(&state)?;
            snapshot.validate()?;
            let formatter = formatter_for(&format);
            let output = formatter.write(
                &snapshot,
                view.into(),
                select.as_deref(),
                cli::view_mode(detailed),
            )?;
            print!("{}", output);
        }
        Command::ShowState { state } => {
            let snapshot = config::load_snapshot(&state)?;
            snapshot.validate()?;
            print!("{}", write_state_overview(&snapshot));
        }
        Command::ListViews => {
            for name in DashboardView::names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

fn formatter_for(format: &FormatArg) -> Box<dyn Formatter> {
    match format {
        FormatArg::Human => Box::new(HumanFormatter),
        FormatArg::Summary => Box::new(SummaryFormatter),
        FormatArg::Json => Box::new(JsonFormatter),
    }
}
