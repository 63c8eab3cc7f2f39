//! Cluster connection configured from the environment, the way `anchor test`
//! exports it: `ANCHOR_PROVIDER_URL` + `ANCHOR_WALLET`.

use solana_client::{client_error::ClientError, nonblocking::rpc_client::RpcClient};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signature, Signer},
    transaction::Transaction,
};
use std::{env, error::Error, path::PathBuf};

use super::token::TokenHost;

pub const DEFAULT_PROVIDER_URL: &str = "http://127.0.0.1:8899";

pub struct Provider {
    pub client: RpcClient,
    pub payer: Keypair,
}

impl Provider {
    pub fn env() -> Result<Self, Box<dyn Error>> {
        let url = env::var("ANCHOR_PROVIDER_URL").unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string());
        let wallet = match env::var("ANCHOR_WALLET") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_wallet_path()?,
        };
        let payer = read_keypair_file(&wallet)
            .map_err(|e| format!("failed to read wallet {}: {e}", wallet.display()))?;

        Ok(Self {
            client: RpcClient::new_with_commitment(url, CommitmentConfig::confirmed()),
            payer,
        })
    }

    /// Sign with the wallet plus `signers`, send and wait for confirmation.
    pub async fn send(&self, instructions: &[Instruction], signers: &[&Keypair]) -> Result<Signature, ClientError> {
        let blockhash = self.client.get_latest_blockhash().await?;
        let mut all: Vec<&Keypair> = vec![&self.payer];
        all.extend_from_slice(signers);
        let tx = Transaction::new_signed_with_payer(instructions, Some(&self.payer.pubkey()), &all, blockhash);
        self.client.send_and_confirm_transaction(&tx).await
    }
}

impl TokenHost for Provider {
    fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    async fn minimum_balance(&mut self, len: usize) -> u64 {
        self.client
            .get_minimum_balance_for_rent_exemption(len)
            .await
            .unwrap()
    }

    async fn submit(&mut self, instructions: &[Instruction], signers: &[&Keypair]) {
        self.send(instructions, signers).await.unwrap();
    }
}

fn default_wallet_path() -> Result<PathBuf, Box<dyn Error>> {
    let home = env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/solana/id.json"))
}
