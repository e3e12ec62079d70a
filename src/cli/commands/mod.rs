//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod packages;
pub mod unpack;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::prompt;
use crate::salesforce::{OrgConnection, SalesforceClient};

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the unlocked packages installed in the org
    Packages {
        #[command(flatten)]
        org: OrgArgs,
    },

    /// Remove the metadata components bundled in an unlocked package
    Unpack {
        #[command(flatten)]
        org: OrgArgs,

        /// Package number to unpack (skips the selection prompt)
        #[arg(short, long)]
        package: Option<usize>,

        /// Confirmation token authorizing the removal (prompted for when omitted)
        #[arg(short, long)]
        token: Option<String>,
    },
}

impl Commands {
    /// Execute the selected command
    pub async fn run(self) -> Result<()> {
        match self {
            Commands::Packages { org } => packages::execute(org).await,
            Commands::Unpack {
                org,
                package,
                token,
            } => unpack::execute(org, package, token).await,
        }
    }
}

/// Org connection arguments shared by all commands
#[derive(Args, Debug)]
pub struct OrgArgs {
    /// My Domain URL of the org (prompted for when omitted)
    #[arg(short, long, env = "SFUNPACK_DOMAIN")]
    pub domain: Option<String>,

    /// Session ID authenticating API calls (prompted for when omitted)
    #[arg(short, long, env = "SFUNPACK_SID")]
    pub sid: Option<String>,
}

impl OrgArgs {
    /// Resolve the connection, prompting for any missing value
    pub fn connect(self) -> Result<SalesforceClient> {
        let domain = match self.domain {
            Some(domain) => domain,
            None => prompt::string_input("My Domain URL")?,
        };
        let sid = match self.sid {
            Some(sid) => sid,
            None => prompt::string_input("Session ID")?,
        };

        Ok(SalesforceClient::new(OrgConnection::new(domain, sid)))
    }
}
