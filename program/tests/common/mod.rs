#![allow(dead_code)]

use solana_program_test::{BanksClientError, ProgramTest, ProgramTestBanksClientExt};
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, ProgramTestContext};
pub use solana_sdk::{
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::{Transaction, TransactionError},
};

// Instruction builders matching the on-chain account order + payloads
pub mod ixn;
// Environment-configured cluster connection
pub mod provider;

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(yield_flow::ID)
}

pub fn program_test() -> ProgramTest {
    let deploy_dir = env::var("BPF_OUT_DIR")
        .unwrap_or_else(|_| format!("{}/../target/deploy", env!("CARGO_MANIFEST_DIR")));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("yield_flow.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.add_upgradeable_program_to_genesis("yield_flow", &program_id());
    pt
}

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}

/// Sign with the payer plus `signers` and submit; returns the transaction signature.
pub async fn send(
    ctx: &mut ProgramTestContext,
    instructions: &[Instruction],
    signers: &[&Keypair],
) -> Result<Signature, BanksClientError> {
    let mut all: Vec<&Keypair> = vec![&ctx.payer];
    all.extend_from_slice(signers);
    let tx = Transaction::new_signed_with_payer(
        instructions,
        Some(&ctx.payer.pubkey()),
        &all,
        ctx.last_blockhash,
    );
    let signature = tx.signatures[0];
    ctx.banks_client.process_transaction(tx).await?;
    Ok(signature)
}

pub fn assert_custom_error(result: Result<Signature, BanksClientError>, code: yield_flow::error::YieldFlowError) {
    let err = result.expect_err("transaction should fail").unwrap();
    assert_eq!(
        err,
        TransactionError::InstructionError(0, InstructionError::Custom(code.code())),
        "expected {}",
        code.message()
    );
}

pub async fn transfer(ctx: &mut ProgramTestContext, recipient: &Pubkey, amount: u64) {
    let ix = system_instruction::transfer(&ctx.payer.pubkey(), recipient, amount);
    send(ctx, &[ix], &[]).await.unwrap();
}

/// Everything `Initialize` needs, already created on the test bank.
pub struct Fixture {
    pub admin: Keypair,
    pub mint_authority: Keypair,
    pub marinade_program: Pubkey,
    pub msol_mint: Pubkey,
    pub usdc_mint: Pubkey,
    pub escrow: Pubkey,
    pub fee_account: Pubkey,
}

impl Fixture {
    /// Create mints and token accounts, but do not initialize the program.
    pub async fn new(ctx: &mut ProgramTestContext) -> Self {
        let admin = Keypair::new();
        transfer(ctx, &admin.pubkey(), 1_000_000_000).await;

        let mint_authority = Keypair::new();
        let msol_mint = token::create_mint(ctx, &mint_authority.pubkey(), 9).await;
        let usdc_mint = token::create_mint(ctx, &mint_authority.pubkey(), 6).await;
        let escrow = token::create_token_account(ctx, &msol_mint, &ixn::escrow_authority()).await;
        let fee_account = token::create_token_account(ctx, &msol_mint, &admin.pubkey()).await;

        Self {
            admin,
            mint_authority,
            marinade_program: Pubkey::new_unique(),
            msol_mint,
            usdc_mint,
            escrow,
            fee_account,
        }
    }

    /// `new` followed by a successful `Initialize`.
    pub async fn initialized(ctx: &mut ProgramTestContext) -> Self {
        let fixture = Self::new(ctx).await;
        let ix = fixture.initialize_ix();
        send(ctx, &[ix], &[&fixture.admin]).await.unwrap();
        fixture
    }

    pub fn initialize_ix(&self) -> Instruction {
        ixn::initialize(
            &self.admin.pubkey(),
            &self.marinade_program,
            &self.msol_mint,
            &self.usdc_mint,
            &self.escrow,
            &self.fee_account,
        )
    }

    /// A funded user holding `msol` freshly minted mSOL.
    pub async fn user_with_msol(&self, ctx: &mut ProgramTestContext, msol: u64) -> (Keypair, Pubkey) {
        let user = Keypair::new();
        transfer(ctx, &user.pubkey(), 100_000_000).await;
        let account = token::create_token_account(ctx, &self.msol_mint, &user.pubkey()).await;
        token::mint_to(ctx, &self.msol_mint, &account, &self.mint_authority, msol).await;
        (user, account)
    }

    /// Open a stake for `user` and deposit `amount`.
    pub async fn stake(
        &self,
        ctx: &mut ProgramTestContext,
        user: &Keypair,
        user_msol: &Pubkey,
        amount: u64,
    ) {
        let ixs = [
            ixn::initialize_user_stake(&user.pubkey(), &self.marinade_program),
            ixn::deposit(&user.pubkey(), user_msol, &self.escrow, amount),
        ];
        send(ctx, &ixs, &[user]).await.unwrap();
    }

    pub async fn set_rate(&self, ctx: &mut ProgramTestContext, lamports_per_msol: u64) {
        let ix = ixn::update_rate(&self.admin.pubkey(), lamports_per_msol);
        send(ctx, &[ix], &[&self.admin]).await.unwrap();
    }

    pub fn claim_ix(&self, user: &Pubkey, user_msol: &Pubkey, auto: bool) -> Instruction {
        ixn::claim_dividend(
            user,
            &self.escrow,
            user_msol,
            &self.fee_account,
            &self.marinade_program,
            auto,
        )
    }
}

pub async fn get_config(ctx: &mut ProgramTestContext) -> yield_flow::state::ProgramConfig {
    let account = ctx
        .banks_client
        .get_account(ixn::config_address())
        .await
        .unwrap()
        .expect("config account");
    *yield_flow::state::ProgramConfig::from_bytes(&account.data).unwrap()
}

pub async fn get_user_stake(ctx: &mut ProgramTestContext, user: &Pubkey) -> yield_flow::state::UserStake {
    let account = ctx
        .banks_client
        .get_account(ixn::user_stake_address(user))
        .await
        .unwrap()
        .expect("user stake account");
    *yield_flow::state::UserStake::from_bytes(&account.data).unwrap()
}

/// Move the bank clock to `unix_timestamp`.
pub async fn set_unix_timestamp(ctx: &mut ProgramTestContext, unix_timestamp: i64) {
    let mut clock: solana_sdk::clock::Clock = ctx.banks_client.get_sysvar().await.unwrap();
    clock.unix_timestamp = unix_timestamp;
    ctx.set_sysvar(&clock);
}
