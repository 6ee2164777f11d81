use clap::Parser;
use clubreg::cli::{Cli, Commands};
use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Reset SIGPIPE so piping into `head` exits quietly instead of panicking.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    let default_level = if global.verbose { "clubreg=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::New(args) => clubreg::cli::commands::new::run(args, &global),
        Commands::Show(args) => clubreg::cli::commands::show::run(args, &global),
        Commands::List(args) => clubreg::cli::commands::list::run(args, &global),
        Commands::Edit(args) => clubreg::cli::commands::edit::run(args, &global),
        Commands::Delete(args) => clubreg::cli::commands::delete::run(args, &global),
        Commands::Check(args) => clubreg::cli::commands::check::run(args, &global),
        Commands::Completions(args) => clubreg::cli::commands::completions::run(args),
    }
}
