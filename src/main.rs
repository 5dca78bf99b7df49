use clap::Parser;
use worklane::application::{
    employee_details, init::init, ConfigService, DemoData, DemoGenerator, TimelineOptions,
    TimelineService,
};
use worklane::cli::{
    format_config, format_employee_details, format_holidays, format_timeline, init_tracing, Cli,
    Commands, DataFormat,
};
use worklane::domain::{ExpandedWeek, TaskFilter, WeekKey, WorkCalendar};
use worklane::error::WorklaneError;
use worklane::infrastructure::config::{check_weeks, parse_date, CONFIG_KEYS};
use worklane::infrastructure::{Config, Workspace};

/// Years with a well-defined Gregorian Easter date
const HOLIDAY_YEARS: std::ops::RangeInclusive<i32> = 1583..=9999;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose, cli.quiet) {
        eprintln!("Error: {}", e.display_with_suggestions());
        std::process::exit(e.exit_code());
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), WorklaneError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            let config = init(&path)?;
            println!("Initialized worklane workspace at {}", path.display());
            println!("Start date: {}", config.start_date);
            println!("Weeks: {}", config.weeks);
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(Workspace::discover()?);

            if list {
                print!("{}", format_config(&service.list()?));
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: worklane config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS.join(", "));
                Ok(())
            }
        }
        Some(Commands::Timeline {
            from,
            weeks,
            search,
            department,
            expand,
        }) => {
            let config = Workspace::load_config_or_default()?;
            let calendar = WorkCalendar::default();
            let data = generate(&calendar, &config);

            let expanded = match expand {
                Some(week) => ExpandedWeek::of(week.parse::<WeekKey>()?),
                None => ExpandedWeek::none(),
            };
            let department = department.filter(|d| !d.eq_ignore_ascii_case("all"));
            let options = TimelineOptions {
                start_date: window_start(&config, from.as_deref())?,
                total_days: window_days(&config, weeks)?,
                filter: TaskFilter::new(department, search),
                expanded,
                widths: config.width_settings(),
            };

            let view = TimelineService::new(&calendar).build(&data.tasks, &options);
            print!("{}", format_timeline(&view));
            Ok(())
        }
        Some(Commands::Employee { id, from, weeks }) => {
            let config = Workspace::load_config_or_default()?;
            let calendar = WorkCalendar::default();
            let data = generate(&calendar, &config);

            let details = employee_details(
                &calendar,
                &data,
                &id,
                window_start(&config, from.as_deref())?,
                window_days(&config, weeks)?,
            )?;
            print!("{}", format_employee_details(&details));
            Ok(())
        }
        Some(Commands::Holidays { year }) => {
            if !HOLIDAY_YEARS.contains(&year) {
                return Err(WorklaneError::Config(format!(
                    "Year {} is out of range ({}-{})",
                    year,
                    HOLIDAY_YEARS.start(),
                    HOLIDAY_YEARS.end()
                )));
            }
            let calendar = WorkCalendar::default();
            print!("{}", format_holidays(&calendar.holiday_list(year)));
            Ok(())
        }
        Some(Commands::Generate { format }) => {
            let config = Workspace::load_config_or_default()?;
            let calendar = WorkCalendar::default();
            let data = generate(&calendar, &config);

            let contents = match format {
                DataFormat::Json => serde_json::to_string_pretty(&data)?,
                DataFormat::Toml => toml::to_string_pretty(&data)?,
            };
            println!("{}", contents);
            Ok(())
        }
        None => {
            println!("worklane - Team workload timeline planner");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn generate(calendar: &WorkCalendar, config: &Config) -> DemoData {
    DemoGenerator::new(calendar, config.start_date, config.total_days(), config.seed).generate()
}

fn window_start(config: &Config, from: Option<&str>) -> Result<chrono::NaiveDate, WorklaneError> {
    match from {
        Some(value) => parse_date(value),
        None => Ok(config.start_date),
    }
}

fn window_days(config: &Config, weeks: Option<u32>) -> Result<usize, WorklaneError> {
    match weeks {
        Some(weeks) => {
            check_weeks(weeks)?;
            Ok(weeks as usize * 7)
        }
        None => Ok(config.total_days()),
    }
}
