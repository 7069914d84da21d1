//! bls-vectors - generate and check BLS test vectors for the on-chain verifier

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use bls_core::{G2CoordinateOrder, SecretKey};
use bls_vectors::{
    build_test_vector, check_test_vector, export_test_vector, load_test_vector, Address,
};

#[derive(Parser)]
#[command(name = "bls-vectors")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign an operator registration message and write the test vector
    Generate {
        /// Secret key as a decimal scalar
        #[arg(short, long, env = "BLS_SECRET_KEY", default_value = "69")]
        secret_key: String,

        /// Operator address (random if omitted)
        #[arg(long, env = "BLS_OPERATOR")]
        operator: Option<String>,

        /// Output JSON path
        #[arg(
            short,
            long,
            env = "BLS_VECTOR_OUTPUT",
            default_value = "build/blsTestVectors.json"
        )]
        output: PathBuf,

        /// Coefficient order of the G2 public key in the JSON
        #[arg(long, value_enum, default_value_t = G2Order::ImaginaryFirst)]
        g2_order: G2Order,
    },

    /// Re-derive the digest of an existing vector and verify its signature
    Check {
        /// Vector JSON path
        path: PathBuf,

        /// Coefficient order of the G2 public key in the JSON
        #[arg(long, value_enum, default_value_t = G2Order::ImaginaryFirst)]
        g2_order: G2Order,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum G2Order {
    /// (x.c1, x.c0, y.c1, y.c0), as the EVM precompile expects
    ImaginaryFirst,
    /// (x.c0, x.c1, y.c0, y.c1)
    RealFirst,
}

impl From<G2Order> for G2CoordinateOrder {
    fn from(order: G2Order) -> Self {
        match order {
            G2Order::ImaginaryFirst => G2CoordinateOrder::ImaginaryFirst,
            G2Order::RealFirst => G2CoordinateOrder::RealFirst,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            secret_key,
            operator,
            output,
            g2_order,
        } => {
            let sk = SecretKey::from_dec_str(&secret_key).context("invalid --secret-key")?;
            let operator = match operator {
                Some(s) => s.parse::<Address>().context("invalid --operator")?,
                None => Address::random(&mut rand::thread_rng()),
            };

            log::info!("[1/3] Signing registration for operator {operator}");
            let vector = build_test_vector(&sk, operator, g2_order.into())?;
            log::info!("  PK_G1     = {:?}", vector.public_key_g1);
            log::info!("  PK_G2     = {:?}", vector.public_key_g2);
            log::info!("  signature = {:?}", vector.signature);

            log::info!("[2/3] Checking vector against its own contents...");
            if !check_test_vector(&vector, g2_order.into())?.is_valid() {
                bail!("generated vector failed its own check");
            }

            log::info!("[3/3] Writing {}", output.display());
            export_test_vector(&vector, &output)
                .with_context(|| format!("failed to write {}", output.display()))?;

            println!("{}", serde_json::to_string_pretty(&vector)?);
        }
        Commands::Check { path, g2_order } => {
            let vector = load_test_vector(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let result = check_test_vector(&vector, g2_order.into())?;
            if !result.is_valid() {
                bail!("signature in {} does not verify", path.display());
            }
            log::info!("{}: signature valid", path.display());
        }
    }

    Ok(())
}
