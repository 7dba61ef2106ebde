//! Runtime configuration: bind address plus which store layout backs the
//! service. Defaults serve the combined `data/db.json`; flags switch to the
//! split two-file layout.

use std::path::PathBuf;

use clap::Parser;

/// Where the two logical collections live on disk.
#[derive(Debug, Clone)]
pub enum StoreLayout {
    /// One combined file holding `jobs` and `skills`
    Combined { db_file: PathBuf },
    /// Two static files, one collection each
    Split {
        jobs_file: PathBuf,
        skills_file: PathBuf,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub layout: StoreLayout,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: "127.0.0.1:3011".to_string(),
            layout: StoreLayout::Combined {
                db_file: PathBuf::from("data/db.json"),
            },
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "getajob", version)]
#[command(about = "Serve job listings, todos, and skill totals over HTTP")]
pub struct Cli {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3011")]
    bind_address: String,

    /// Combined JSON store file
    #[arg(long, default_value = "data/db.json", conflicts_with_all = ["jobs_file", "skills_file"])]
    db_file: PathBuf,

    /// Jobs file for the split layout (requires --skills-file)
    #[arg(long, requires = "skills_file")]
    jobs_file: Option<PathBuf>,

    /// Skills file for the split layout (requires --jobs-file)
    #[arg(long, requires = "jobs_file")]
    skills_file: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let layout = match (self.jobs_file, self.skills_file) {
            (Some(jobs_file), Some(skills_file)) => StoreLayout::Split {
                jobs_file,
                skills_file,
            },
            _ => StoreLayout::Combined {
                db_file: self.db_file,
            },
        };
        Config {
            bind_address: self.bind_address,
            layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_combined_layout() {
        let config = Cli::parse_from(["getajob"]).into_config();
        assert_eq!(config.bind_address, "127.0.0.1:3011");
        assert!(matches!(
            config.layout,
            StoreLayout::Combined { ref db_file } if db_file == &PathBuf::from("data/db.json")
        ));
    }

    #[test]
    fn split_layout_needs_both_files() {
        assert!(Cli::try_parse_from(["getajob", "--jobs-file", "jobs.json"]).is_err());

        let config = Cli::parse_from([
            "getajob",
            "--jobs-file",
            "jobs.json",
            "--skills-file",
            "skills.json",
        ])
        .into_config();
        assert!(matches!(config.layout, StoreLayout::Split { .. }));
    }

    #[test]
    fn db_file_conflicts_with_split_flags() {
        assert!(
            Cli::try_parse_from([
                "getajob",
                "--db-file",
                "db.json",
                "--jobs-file",
                "jobs.json",
                "--skills-file",
                "skills.json",
            ])
            .is_err()
        );
    }
}
