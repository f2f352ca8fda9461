//! Confirmation pages.
//!
//! Every function here is pure: it turns parsed data into [`Page`]s and
//! leaves presenting them to the [`crate::signing::Confirm`] collaborator.

use solana_pubkey::Pubkey;
use solsign_account_checks::{AccessTag, Account, AddressReference};
use solsign_instruction_decoder::{
    formatter::{format_amount, format_field, format_lamports},
    StructuredInstruction,
};

use crate::{
    fee::Fee,
    patterns::{
        NativeTransfer, Pattern, StakeDeactivate, StakeDelegate, StakeWithdraw, TokenTransfer,
    },
    transaction::Transaction,
};

pub const HARDENED: u32 = 0x8000_0000;
const ACCOUNT_PATH_INDEX: usize = 3;

/// Vote accounts shown by name in the stake summary.
pub const KNOWN_VOTE_ACCOUNTS: &[(&str, &str)] =
    &[("9QU2QSxhb24FUX3Tu2FpczXjpK3VYrvRudywSZaM29mF", "Everstake")];

/// One confirmation screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub items: Vec<(String, String)>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.push((key.into(), value.into()));
        self
    }

    pub fn extend(mut self, items: impl IntoIterator<Item = (String, String)>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Who is signing, used to tag the signer's own address.
#[derive(Debug, Clone, Copy)]
pub struct SignerInfo<'a> {
    pub path: &'a [u32],
    pub pubkey: &'a Pubkey,
}

pub fn encode_pubkey(pubkey: &Pubkey) -> String {
    bs58::encode(pubkey.as_ref()).into_string()
}

/// `m/44'/501'/0'/0'` notation.
pub fn address_n_to_str(path: &[u32]) -> String {
    let mut formatted = String::from("m");
    for index in path {
        if index & HARDENED != 0 {
            formatted.push_str(&format!("/{}'", index & !HARDENED));
        } else {
            formatted.push_str(&format!("/{index}"));
        }
    }
    formatted
}

/// Short account name, `Solana #1` for the first account.
pub fn format_path(path: &[u32]) -> String {
    match path.get(ACCOUNT_PATH_INDEX) {
        Some(account) => format!("Solana #{}", (account & !HARDENED) as u64 + 1),
        None => address_n_to_str(path),
    }
}

/// Every page shown before signing `transaction`, in order.
pub fn transaction_pages(
    transaction: &Transaction,
    pattern: Option<&Pattern>,
    signer: SignerInfo<'_>,
) -> Vec<Page> {
    let fee = transaction.fee();
    let blockhash = transaction.blockhash();

    let mut pages = Vec::new();
    if transaction.blind_signing() {
        pages.push(blind_signing_warning());
    }
    match pattern {
        Some(pattern) => pages.extend(pattern_pages(pattern, &fee, blockhash, signer)),
        None => {
            let instructions = transaction.get_visible_instructions();
            for (i, instruction) in instructions.iter().enumerate() {
                pages.extend(instruction_pages(instruction, i + 1, instructions.len(), signer));
            }
            pages.push(fee_page(&fee, transaction.blind_signing(), blockhash));
        }
    }
    pages
}

pub fn blind_signing_warning() -> Page {
    Page::new("Blind signing").item(
        "The transaction contains unknown instructions. Sign only if you trust its source.",
        "",
    )
}

/// Pages of one instruction, `index` counted from 1.
pub fn instruction_pages(
    instruction: &StructuredInstruction,
    index: usize,
    count: usize,
    signer: SignerInfo<'_>,
) -> Vec<Page> {
    if !instruction.is_supported() {
        return vec![unsupported_instruction_page(instruction, index, count, signer)];
    }

    let title = format!("{index}/{count}: {}", instruction.ui_name);
    let mut pages = Vec::new();
    if let Some(warning) = instruction.is_deprecated_warning {
        pages.push(Page::new(title.clone()).item(warning, ""));
    }
    if instruction.is_multisig() {
        let multisig = Page::new("Confirm multisig");
        pages.push(multisig.item("Instruction is multisig", ""));
    }

    let mut page = Page::new(title.clone());
    for role in &instruction.accounts {
        if let Some(account) = &role.account {
            page.items
                .extend(account_items(role.schema.ui_name, account, signer.pubkey));
        }
    }
    for field in &instruction.fields {
        if let Some(value) = format_field(field, instruction) {
            page.items.push((field.schema.ui_name.to_string(), value));
        }
    }
    pages.push(page);

    if instruction.is_multisig() {
        let mut signers = Page::new(title);
        for (i, account) in instruction.multisig_signers.iter().enumerate() {
            let path = if account.is(signer.pubkey) {
                format!(" ({})", address_n_to_str(signer.path))
            } else {
                String::new()
            };
            signers
                .items
                .push((format!("Signer {}{path}:", i + 1), account_value(account)));
        }
        pages.push(signers);
    }
    pages
}

/// Raw data and accounts of an instruction outside the registry.
pub fn unsupported_instruction_page(
    instruction: &StructuredInstruction,
    index: usize,
    count: usize,
    signer: SignerInfo<'_>,
) -> Page {
    let title = if instruction.is_program_supported {
        let id = instruction
            .instruction_id
            .map_or_else(|| "N/A".to_string(), |id| id.to_string());
        format!(
            "{index}/{count}: {}: instruction id ({id})",
            instruction.program_name()
        )
    } else {
        format!("{index}/{count}: {}", instruction.program_name())
    };

    let mut page = Page::new(title)
        .item(
            format!(
                "Instruction contains {} accounts and its data is {} bytes long.",
                instruction.raw_accounts.len(),
                instruction.raw_data.len()
            ),
            "",
        )
        .item("Instruction data:", hex::encode(&instruction.raw_data));
    for (i, account) in instruction.raw_accounts.iter().enumerate() {
        let label = match account {
            Account::Direct(address) if address.pubkey == *signer.pubkey => {
                format!("Account {} ({})", i + 1, address_n_to_str(signer.path))
            }
            _ => format!("Account {}", i + 1),
        };
        let label = with_tag(label, account.tag());
        let items = match account {
            Account::LookupTable(reference) => lookup_table_items(&label, reference),
            Account::Direct(_) => vec![(format!("{label}:"), account_value(account))],
        };
        page = page.extend(items);
    }
    page
}

/// Fee summary closing every confirmation.
pub fn fee_page(fee: &Fee, blind_signing: bool, blockhash: &[u8; 32]) -> Page {
    let (title, total, mut items) = fee_items(fee, blind_signing);
    items.insert(0, (title, total));
    let blockhash = bs58::encode(blockhash).into_string();
    items.push(("Blockhash".to_string(), blockhash));
    Page {
        title: "Summary".to_string(),
        items,
    }
}

fn fee_items(fee: &Fee, blind_signing: bool) -> (String, String, Vec<(String, String)>) {
    if blind_signing {
        return (
            "Max fees and rent:".to_string(),
            "unknown".to_string(),
            Vec::new(),
        );
    }
    let mut items = vec![("Base fee".to_string(), format_lamports(fee.base))];
    if fee.priority != 0 {
        items.push(("Priority fee".to_string(), format_lamports(fee.priority)));
    }
    let title = if fee.rent != 0 {
        items.push(("Max rent fee".to_string(), format_lamports(fee.rent)));
        "Max fees and rent:"
    } else {
        "Transaction fee:"
    };
    (title.to_string(), format_lamports(fee.total), items)
}

/// Summary pages of a recognized pattern, fee page included.
pub fn pattern_pages(
    pattern: &Pattern,
    fee: &Fee,
    blockhash: &[u8; 32],
    signer: SignerInfo<'_>,
) -> Vec<Page> {
    match pattern {
        Pattern::NativeTransfer(transfer) => {
            native_transfer_pages(transfer, fee, blockhash, signer)
        }
        Pattern::TokenTransfer(transfer) => token_transfer_pages(transfer, fee, blockhash, signer),
        Pattern::StakeDelegate(delegate) => {
            vec![stake_delegate_page(delegate, fee, blockhash, signer)]
        }
        Pattern::StakeDeactivate(deactivate) => {
            vec![stake_deactivate_page(deactivate, fee, blockhash, signer)]
        }
        Pattern::StakeWithdraw(withdraw) => {
            vec![stake_withdraw_page(withdraw, fee, blockhash, signer)]
        }
    }
}

fn native_transfer_pages(
    transfer: &NativeTransfer,
    fee: &Fee,
    blockhash: &[u8; 32],
    signer: SignerInfo<'_>,
) -> Vec<Page> {
    let recipient = account_items("Recipient", &transfer.recipient, signer.pubkey);
    vec![
        Page::new("Recipient").extend(recipient),
        amount_page(format_lamports(transfer.lamports), fee, blockhash),
    ]
}

fn token_transfer_pages(
    transfer: &TokenTransfer,
    fee: &Fee,
    blockhash: &[u8; 32],
    signer: SignerInfo<'_>,
) -> Vec<Page> {
    let mut recipient = Page::new("Recipient");
    match transfer.base_owner {
        Some(owner) => {
            recipient = recipient.item("Recipient", encode_pubkey(&owner));
            if !transfer.token_account.is(&owner) {
                let token_account = account_value(&transfer.token_account);
                recipient = recipient.item("Associated token account:", token_account);
            }
        }
        None => {
            let items = account_items("Recipient", &transfer.token_account, signer.pubkey);
            recipient = recipient.extend(items);
        }
    }
    if transfer.creates_token_account {
        recipient = recipient.item("Creates the recipient token account", "");
    }

    let mint = account_items("Mint", &transfer.token_mint, signer.pubkey);
    let token = Page::new("Token")
        .extend(mint)
        .item("Token program", encode_pubkey(&transfer.token_program));

    let amount = format_amount(transfer.amount, transfer.decimals);
    vec![recipient, token, amount_page(amount, fee, blockhash)]
}

fn amount_page(amount: String, fee: &Fee, blockhash: &[u8; 32]) -> Page {
    let mut page = fee_page(fee, false, blockhash);
    page.items.insert(0, ("Amount:".to_string(), amount));
    page
}

fn stake_delegate_page(
    delegate: &StakeDelegate,
    fee: &Fee,
    blockhash: &[u8; 32],
    signer: SignerInfo<'_>,
) -> Page {
    let label = delegate
        .vote_account
        .pubkey()
        .map(encode_pubkey)
        .and_then(|vote_account| {
            KNOWN_VOTE_ACCOUNTS
                .iter()
                .find(|(address, _)| *address == vote_account)
                .map(|(_, label)| *label)
        });

    let mut page = Page::new("Stake");
    match label {
        Some(label) => page = page.item(format!("Stake SOL on {label}?"), ""),
        None => {
            let vote = account_items("Vote account", &delegate.vote_account, signer.pubkey);
            page = page.item("Stake SOL?", "").extend(vote);
        }
    }
    let stake_account = account_items("Stake account", &delegate.stake_account, signer.pubkey);
    let page = account_page(page, signer)
        .extend(stake_account)
        .item("Amount:", format_lamports(delegate.lamports));
    staking_fee_items(page, fee, blockhash)
}

fn stake_deactivate_page(
    deactivate: &StakeDeactivate,
    fee: &Fee,
    blockhash: &[u8; 32],
    signer: SignerInfo<'_>,
) -> Page {
    let mut page = account_page(Page::new("Unstake").item("Unstake SOL?", ""), signer);
    for account in &deactivate.stake_accounts {
        let items = account_items("Stake account", account, signer.pubkey);
        page = page.extend(items);
    }
    staking_fee_items(page, fee, blockhash)
}

fn stake_withdraw_page(
    withdraw: &StakeWithdraw,
    fee: &Fee,
    blockhash: &[u8; 32],
    signer: SignerInfo<'_>,
) -> Page {
    let page = Page::new("Claim");
    let mut page = account_page(page.item("Claim SOL from stake account?", ""), signer);
    for recipient in &withdraw.recipients {
        let items = account_items("Recipient", recipient, signer.pubkey);
        page = page.extend(items);
    }
    let page = page.item("Amount:", format_lamports(withdraw.lamports));
    staking_fee_items(page, fee, blockhash)
}

fn account_page(page: Page, signer: SignerInfo<'_>) -> Page {
    page.item("Account", format_path(signer.path))
        .item("Derivation path", address_n_to_str(signer.path))
}

fn staking_fee_items(mut page: Page, fee: &Fee, blockhash: &[u8; 32]) -> Page {
    let (title, total, items) = fee_items(fee, false);
    page.items.push((title, total));
    page.items.extend(items);
    page.item("Blockhash", bs58::encode(blockhash).into_string())
}

/// Items describing `account` under `name`. Lookup table entries are shown
/// as their table address and index.
fn account_items(name: &str, account: &Account, signer: &Pubkey) -> Vec<(String, String)> {
    match account {
        Account::Direct(address) => {
            let mut value = encode_pubkey(&address.pubkey);
            if address.pubkey == *signer {
                value.push_str(" (signer)");
            }
            vec![(name.to_string(), value)]
        }
        Account::LookupTable(reference) => lookup_table_items(name, reference),
    }
}

fn lookup_table_items(name: &str, reference: &AddressReference) -> Vec<(String, String)> {
    let provided = format!("{name} is provided via lookup table");
    vec![
        (provided, String::new()),
        (
            "Lookup table address:".to_string(),
            encode_pubkey(&reference.table),
        ),
        ("Account index:".to_string(), reference.index.to_string()),
    ]
}

fn account_value(account: &Account) -> String {
    match account {
        Account::Direct(address) => encode_pubkey(&address.pubkey),
        Account::LookupTable(reference) => {
            format!("{}[{}]", encode_pubkey(&reference.table), reference.index)
        }
    }
}

fn with_tag(label: String, tag: AccessTag) -> String {
    match tag.text() {
        "" => label,
        text => format!("{label} {text}"),
    }
}

#[cfg(test)]
mod tests {
    use solsign_account_checks::Address;
    use solsign_instruction_decoder::{decode_instruction, programs::SYSTEM_PROGRAM_ID};

    use super::*;

    const PATH: [u32; 4] = [44 | HARDENED, 501 | HARDENED, HARDENED, HARDENED];

    #[test]
    fn test_address_n_to_str() {
        assert_eq!(address_n_to_str(&PATH), "m/44'/501'/0'/0'");
        assert_eq!(address_n_to_str(&[44 | HARDENED, 7]), "m/44'/7");
        assert_eq!(address_n_to_str(&[]), "m");
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&PATH), "Solana #1");
        assert_eq!(
            format_path(&[44 | HARDENED, 501 | HARDENED, HARDENED, 4 | HARDENED]),
            "Solana #5"
        );
        assert_eq!(format_path(&[44 | HARDENED, 501 | HARDENED]), "m/44'/501'");
    }

    #[test]
    fn test_fee_page_titles() {
        let blockhash = [0u8; 32];
        let fee = Fee {
            base: 5000,
            priority: 0,
            rent: 0,
            total: 5000,
        };
        let page = fee_page(&fee, false, &blockhash);
        assert_eq!(page.value("Transaction fee:"), Some("0.000005 SOL"));
        assert_eq!(page.value("Base fee"), Some("0.000005 SOL"));
        assert_eq!(page.value("Priority fee"), None);
        assert_eq!(
            page.value("Blockhash"),
            Some("11111111111111111111111111111111")
        );

        let fee = Fee {
            base: 5000,
            priority: 1,
            rent: 2_039_280,
            total: 2_044_281,
        };
        let page = fee_page(&fee, false, &blockhash);
        assert_eq!(page.value("Max fees and rent:"), Some("0.002044281 SOL"));
        assert_eq!(page.value("Priority fee"), Some("0.000000001 SOL"));
        assert_eq!(page.value("Max rent fee"), Some("0.00203928 SOL"));

        let page = fee_page(&fee, true, &blockhash);
        assert_eq!(page.value("Max fees and rent:"), Some("unknown"));
        assert_eq!(page.value("Base fee"), None);
    }

    #[test]
    fn test_lookup_table_items() {
        let table = Pubkey::new_from_array([3; 32]);
        let account = Account::LookupTable(AddressReference {
            table,
            index: 9,
            tag: AccessTag::Writable,
        });
        let items = account_items("Recipient", &account, &Pubkey::default());
        assert_eq!(items[0].0, "Recipient is provided via lookup table");
        assert_eq!(
            items[1],
            ("Lookup table address:".to_string(), encode_pubkey(&table))
        );
        assert_eq!(items[2], ("Account index:".to_string(), "9".to_string()));
    }

    #[test]
    fn test_unsupported_instruction_titles() {
        let signer = Pubkey::new_from_array([1; 32]);
        let account = Account::Direct(Address::new(signer, AccessTag::SignerWritable));
        let accounts = [account];
        let info = SignerInfo {
            path: &PATH,
            pubkey: &signer,
        };

        let unknown_id = 99u32.to_le_bytes();
        let instruction = decode_instruction(&SYSTEM_PROGRAM_ID, &unknown_id, &accounts).unwrap();
        let page = unsupported_instruction_page(&instruction, 1, 2, info);
        assert_eq!(page.title, "1/2: System Program: instruction id (99)");
        assert_eq!(page.value("Instruction data:"), Some("63000000"));

        let other_program = Pubkey::new_from_array([0xEE; 32]);
        let instruction = decode_instruction(&other_program, &[1], &accounts).unwrap();
        let page = unsupported_instruction_page(&instruction, 2, 2, info);
        assert_eq!(page.title, "2/2: Unsupported program");
        assert_eq!(
            page.value("Account 1 (m/44'/501'/0'/0') (writable, signer):"),
            Some(signer.to_string().as_str())
        );
    }

    #[test]
    fn test_with_tag() {
        assert_eq!(
            with_tag("Account 1".to_string(), AccessTag::SignerWritable),
            "Account 1 (writable, signer)"
        );
        assert_eq!(
            with_tag("Account 2".to_string(), AccessTag::ReadOnly),
            "Account 2"
        );
    }
}
