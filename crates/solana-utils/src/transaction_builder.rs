use std::ops::Deref;

use anchor_lang::{InstructionData, ToAccountMetas};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    hash::Hash,
    instruction::{AccountMeta, Instruction},
    message::{v0, VersionedMessage},
    pubkey::Pubkey,
    signer::{Signer, SignerError},
    transaction::VersionedTransaction,
};

use crate::signer::BoxSigner;

/// Wallet Config.
#[derive(Clone)]
pub struct Config<C> {
    payer: C,
    options: CommitmentConfig,
}

impl<C> Config<C> {
    /// Create a new wallet config.
    pub fn new(payer: C, options: CommitmentConfig) -> Self {
        Self { payer, options }
    }

    /// Get commitment config.
    pub fn commitment(&self) -> &CommitmentConfig {
        &self.options
    }
}

impl<C: Deref<Target = impl Signer>> Config<C> {
    /// Get payer pubkey.
    ///
    /// Returns an error if the wallet cannot provide its public key,
    /// e.g., it is disconnected.
    pub fn try_payer(&self) -> Result<Pubkey, SignerError> {
        self.payer.try_pubkey()
    }
}

/// A builder for a transaction.
#[must_use = "transaction builder do nothing if not built"]
pub struct TransactionBuilder<C, T = ()> {
    output: T,
    program_id: Pubkey,
    cfg: Config<C>,
    owned_signers: Vec<BoxSigner>,
    pre_instructions: Vec<Instruction>,
    accounts: Vec<AccountMeta>,
    instruction_data: Option<Vec<u8>>,
}

impl<C: Deref<Target = impl Signer> + Clone> TransactionBuilder<C> {
    /// Create a new transaction builder.
    pub fn new(program_id: Pubkey, cfg: &Config<C>) -> Self {
        Self {
            output: (),
            program_id,
            cfg: cfg.clone(),
            owned_signers: Default::default(),
            pre_instructions: Default::default(),
            accounts: Default::default(),
            instruction_data: None,
        }
    }
}

impl<C: Deref<Target = impl Signer> + Clone, T> TransactionBuilder<C, T> {
    /// Get the pubkey of the payer.
    pub fn try_payer(&self) -> Result<Pubkey, SignerError> {
        self.cfg.try_payer()
    }

    /// Add an owned signer to the signer list.
    ///
    /// Typically the ephemeral keypair of a newly created account.
    pub fn owned_signer(mut self, signer: impl Signer + 'static) -> Self {
        self.owned_signers.push(Box::new(signer));
        self
    }

    /// Append accounts for the main instruction.
    pub fn accounts(mut self, mut accounts: Vec<AccountMeta>) -> Self {
        self.accounts.append(&mut accounts);
        self
    }

    /// Append accounts for the main instruction.
    pub fn anchor_accounts(self, accounts: impl ToAccountMetas) -> Self {
        self.accounts(accounts.to_account_metas(None))
    }

    /// Set arguments for the main instruction.
    pub fn args(mut self, args: Vec<u8>) -> Self {
        self.instruction_data = Some(args);
        self
    }

    /// Set arguments for the main instruction.
    pub fn anchor_args(self, args: impl InstructionData) -> Self {
        self.args(args.data())
    }

    /// Construct the "main" instruction if present.
    fn get_instruction(&self) -> Option<Instruction> {
        let ix_data = self.instruction_data.as_ref()?;
        Some(Instruction {
            program_id: self.program_id,
            data: ix_data.clone(),
            accounts: self.accounts.clone(),
        })
    }

    /// Construct all instructions.
    pub fn instructions(&self) -> Vec<Instruction> {
        let mut instructions = self.pre_instructions.clone();
        if let Some(ix) = self.get_instruction() {
            instructions.push(ix);
        }
        instructions
    }

    /// Get the output.
    pub fn get_output(&self) -> &T {
        &self.output
    }

    /// Set the output and return the previous.
    pub fn swap_output<U>(self, output: U) -> (TransactionBuilder<C, U>, T) {
        let Self {
            cfg,
            owned_signers,
            output: previous,
            program_id,
            pre_instructions,
            accounts,
            instruction_data,
        } = self;

        (
            TransactionBuilder {
                cfg,
                owned_signers,
                output,
                program_id,
                pre_instructions,
                accounts,
                instruction_data,
            },
            previous,
        )
    }

    /// Set the output.
    pub fn output<U>(self, output: U) -> TransactionBuilder<C, U> {
        self.swap_output(output).0
    }

    /// Insert an instruction before the "main" instruction.
    pub fn pre_instruction(mut self, ix: Instruction, append: bool) -> Self {
        if append {
            self.pre_instructions.push(ix);
        } else {
            self.pre_instructions.insert(0, ix);
        }

        self
    }

    /// Get versioned message with the given hash.
    pub fn message_with_blockhash(&self, latest_hash: Hash) -> crate::Result<VersionedMessage> {
        let payer = self.cfg.try_payer()?;
        let message = v0::Message::try_compile(&payer, &self.instructions(), &[], latest_hash)?;
        Ok(VersionedMessage::V0(message))
    }

    /// Get signed transaction with the given hash.
    ///
    /// The payer and the owned signers sign the message.
    pub fn signed_transaction_with_blockhash(
        &self,
        latest_hash: Hash,
    ) -> crate::Result<VersionedTransaction> {
        let message = self.message_with_blockhash(latest_hash)?;

        let mut signers: Vec<&dyn Signer> = vec![&*self.cfg.payer];
        for signer in self.owned_signers.iter() {
            signers.push(signer.as_ref());
        }

        let tx = VersionedTransaction::try_new(message, &signers)?;

        Ok(tx)
    }
}
