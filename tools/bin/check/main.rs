use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, arg, command};
use tracing::info;

use site::{
    read_site,
    section::SECTIONS,
    theme::{ThemeMode, resolve},
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// site file
    #[arg(short, long, default_value = "webapp/content/site.toml")]
    site: PathBuf,

    /// log debug output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// parse and validate the site file (default)
    Validate,

    /// list the section anchors in page order
    Sections,

    /// count the entries in each content table
    Summary {
        /// print as json
        #[arg(long)]
        json: bool,
    },

    /// print the css custom properties for a theme mode
    Theme {
        /// mode to resolve (light or dark)
        #[arg(short, long, default_value = "dark")]
        mode: ThemeMode,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    match cli.command.unwrap_or(Commands::Validate) {
        Commands::Validate => {
            let site = read_site(&cli.site)?;
            info!(mode = %site.config.default_mode, "site file is valid");

            println!("{}: ok", cli.site.display());
            match &site.config.contact_endpoint {
                Some(endpoint) => println!("contact submissions are posted to {endpoint}"),
                None => println!("contact submissions stay in the browser log"),
            }
        }

        Commands::Sections => {
            for section in SECTIONS.iter() {
                println!("#{:<12} {:<12} {:?}", section.id, section.label, section.icon);
            }
        }

        Commands::Summary { json } => {
            let site = read_site(&cli.site)?;
            let portfolio = &site.portfolio;

            let summary = serde_json::json!({
                "name": portfolio.profile.name,
                "brand": portfolio.profile.brand(),
                "highlights": portfolio.about.highlights.len(),
                "skill_categories": portfolio.skills.categories.len(),
                "skills": portfolio.skills.categories.iter().map(|c| c.skills.len()).sum::<usize>(),
                "roles": portfolio.experience.roles.len(),
                "degrees": portfolio.education.degrees.len(),
                "projects": portfolio.projects.items.len(),
                "channels": portfolio.profile.channels(),
            });

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{} ({})", portfolio.profile.name, portfolio.profile.brand());
                println!("highlights:       {}", portfolio.about.highlights.len());
                println!("skill categories: {}", portfolio.skills.categories.len());
                println!("roles:            {}", portfolio.experience.roles.len());
                println!("degrees:          {}", portfolio.education.degrees.len());
                println!("projects:         {}", portfolio.projects.items.len());
            }
        }

        Commands::Theme { mode } => {
            println!("{}", resolve(mode).css_variables());
        }
    }

    Ok(())
}
