use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use udfcrypt::{HostFunctions, Outcome, Udf};

#[derive(Debug, Parser)]
#[command(name = "udfcrypt")]
#[command(
    version,
    about = "Deterministic security and network primitives for a query-engine host."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Derive key material with PBKDF2-HMAC, printed as hex
    Pbkdf2 {
        /// Digest name (sha1, sha224, sha256, sha384, sha512)
        digest: String,
        /// Password, used as raw bytes
        password: String,
        /// Salt as a hex string (may be empty)
        salt: String,
        /// Iteration count
        iterations: u32,
    },
    /// Generate cryptographically secure random salt, printed as hex
    Salt {
        /// Number of random bytes (1..=65536)
        bytes: u32,
    },
    /// IPv6 CIDR prefix computations
    Net6 {
        #[command(subcommand)]
        op: Net6Op,
    },
}

#[derive(Debug, Subcommand)]
enum Net6Op {
    /// Network address of the prefix (host bits cleared)
    Network {
        /// IPv6 address in presentation form
        address: String,
        /// Prefix length (0..=128)
        prefix_len: i64,
    },
    /// Last address of the prefix (host bits set)
    Last {
        /// IPv6 address in presentation form
        address: String,
        /// Prefix length (0..=128)
        prefix_len: i64,
    },
}

fn finish<T>(outcome: Outcome<T>) -> Result<T> {
    match outcome {
        Outcome::Value(v) => Ok(v),
        Outcome::Null => bail!("no result (NULL)"),
        Outcome::Error(e) => Err(e.into()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let udf = Udf;

    match cli.command {
        Commands::Pbkdf2 {
            digest,
            password,
            salt,
            iterations,
        } => {
            let salt = hex::decode(&salt).context("salt must be a hex string")?;
            let key = finish(udf.pbkdf2_hmac(
                &digest,
                password.as_bytes(),
                &salt,
                &iterations.to_ne_bytes(),
            ))?;
            println!("{}", hex::encode(key.as_bytes()));
        }
        Commands::Salt { bytes } => {
            let salt = finish(udf.get_salt(&bytes.to_ne_bytes()))?;
            println!("{}", hex::encode(salt.as_bytes()));
        }
        Commands::Net6 { op } => {
            let text = match op {
                Net6Op::Network {
                    address,
                    prefix_len,
                } => finish(udf.inet6_network_address(&address, prefix_len))?,
                Net6Op::Last {
                    address,
                    prefix_len,
                } => finish(udf.inet6_last_address(&address, prefix_len))?,
            };
            println!("{text}");
        }
    }

    Ok(())
}
