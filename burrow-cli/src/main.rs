use std::{
    io::{self, Write as _},
    path::PathBuf,
};

use burrow::{BoundaryPolicy, Dims, Generator};
use burrow_cli::{
    logging,
    renderer::RenderMode,
    settings::{Settings, SettingsError},
    CliError,
};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BoundaryArg {
    /// Wall every boundary cell except the entrance and the exit
    Seal,
    /// Only wall the old start cell when too many boundary cells are open
    Legacy,
}

impl From<BoundaryArg> for BoundaryPolicy {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Seal => BoundaryPolicy::Seal,
            BoundaryArg::Legacy => BoundaryPolicy::Legacy,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "burrow")]
struct Args {
    #[clap(help = "Maze width, outer wall included")]
    width: Option<i32>,
    #[clap(help = "Maze height, outer wall included")]
    height: Option<i32>,
    #[clap(short, long, help = "Seed, a random one is used when missing")]
    seed: Option<u64>,
    #[clap(short, long, value_enum, default_value_t = RenderMode::Tiles)]
    render: RenderMode,
    #[clap(short, long, value_enum, help = "Overrides the boundary policy from settings")]
    boundary: Option<BoundaryArg>,
    #[clap(long, help = "Settings file to use instead of the default one")]
    settings: Option<PathBuf>,
    #[clap(long, action, help = "Disable colored output")]
    no_color: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, can be repeated")]
    verbose: u8,
    #[clap(long, action, help = "Show settings path and quit")]
    show_settings_path: bool,
    #[clap(long, action, help = "Reset settings to default and quit")]
    reset_settings: bool,
}

fn main() -> Result<(), CliError> {
    let args = Args::parse();

    let settings_path = match args.settings.clone() {
        Some(path) => path,
        None => Settings::default_path()?,
    };

    if args.reset_settings {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    if args.show_settings_path {
        match settings_path.to_str() {
            Some(s) => println!("{}", s),
            None => println!("{:?}", settings_path),
        }
        return Ok(());
    }

    better_panic::install();

    let settings = match Settings::load(&settings_path) {
        Ok(settings) => settings,
        // only a file given on the command line has to parse
        Err(err @ SettingsError::Parse(_)) if args.settings.is_none() => {
            eprintln!("{}, using defaults", err);
            Settings::default()
        }
        Err(err) => return Err(err.into()),
    };

    let color = !args.no_color && settings.get_color();
    let level = settings.get_log_level().raised(args.verbose);
    logging::init(level.into(), color)?;

    let size = Dims(
        args.width.unwrap_or_else(|| settings.get_width()),
        args.height.unwrap_or_else(|| settings.get_height()),
    );
    let boundary = args
        .boundary
        .map(BoundaryPolicy::from)
        .unwrap_or_else(|| settings.get_boundary_policy());

    let maze = Generator::new(boundary).generate(size, args.seed)?;
    log::info!("seed: {}", maze.seed());

    let renderer = args.render.renderer(&settings, color);
    let mut out = io::stdout().lock();
    renderer.render(&maze, &mut out)?;
    out.flush()?;

    Ok(())
}
