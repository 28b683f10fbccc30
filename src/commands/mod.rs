mod comment;
mod decode;
mod invoice;
mod lnurl;
mod qr;
mod tip;
mod uri;

use std::path::PathBuf;

use clap::Subcommand;
use clap_complete::Shell;
pub use comment::comment;
pub use decode::decode;
pub use invoice::{invoice, invoice_url};
pub use lnurl::{lnurl, LnurlCommandError};
pub use qr::{qr, single_qr};
pub use tip::{tip, TipCommandError};
pub use uri::uri;

/// Modules at the border of the QR codes printed along with other output
pub const QR_BORDER: u8 = 4;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the LNURL-pay bech32 string to send `amount` sats to a lightning address
    ///
    /// The encoded url is `https://<domain>/.well-known/lnurlp/<user>?amount=<millisats>`
    ///
    /// ```
    /// # use zapdesk::test_util::*;
    /// let stdout = sh("", "zapdesk lnurl alice@example.com --amount 1000");
    /// assert_eq!(stdout, "lnurl1dp68gurn8ghj7etcv9khqmr99e3k7mf09emk2mrv944kummhdchkcmn4wfk8qtmpd35kxeflv9kk7atwws7nzvpsxqcrqvqshuz0r");
    /// let stdout = sh("alice@example.com", "zapdesk lnurl - --amount 2000 --uppercase");
    /// assert_eq!(stdout, "LNURL1DP68GURN8GHJ7ETCV9KHQMR99E3K7MF09EMK2MRV944KUMMHDCHKCMN4WFK8QTMPD35KXEFLV9KK7ATWWS7NYVPSXQCRQVQ629L5T");
    /// ```
    #[clap(verbatim_doc_comment)]
    Lnurl {
        /// The lightning address, like `alice@example.com`, `-` to read it from standard input
        #[arg(env = "ZAPDESK_LIGHTNING_ADDRESS")]
        address: String,

        /// Tip amount in satoshis
        #[arg(short, long)]
        amount: u64,

        /// Print the LNURL in upper case
        #[arg(long)]
        uppercase: bool,

        /// Print also a QR code of the LNURL
        #[arg(long)]
        qr: bool,
    },

    /// Print a `lightning:` URI of the address, with the amount if given
    ///
    /// ```
    /// # use zapdesk::test_util::*;
    /// let stdout = sh("", "zapdesk uri bob@example.com --amount 500");
    /// assert_eq!(stdout, "lightning:bob@example.com?amount=500sat");
    /// let stdout = sh("", "zapdesk uri bob@example.com");
    /// assert_eq!(stdout, "lightning:bob@example.com");
    /// ```
    #[clap(verbatim_doc_comment)]
    Uri {
        /// The lightning address, `-` to read it from standard input
        #[arg(env = "ZAPDESK_LIGHTNING_ADDRESS")]
        address: String,

        /// Amount in satoshis
        #[arg(short, long)]
        amount: Option<u64>,
    },

    /// Decode an LNURL printing the url it contains
    ///
    /// ```
    /// # use zapdesk::test_util::*;
    /// let stdout = sh("", "zapdesk decode LNURL1DP68GURN8GHJ7UM9WFMXJCM99E3K7MF0V9CXJ0M385EKVCENXC6R2C35XVUKXEFCV5MKVV34X5EKZD3EV56NYD3HXQURZEPEXEJXXEPNXSCRVWFNV9NXZCN9XQ6XYEFHVGCXXCMYXYMNSERXFQ5FNS");
    /// assert_eq!(stdout, "https://service.com/api?q=3fc3645b439ce8e7f2553a69e5267081d96dcd340693afabe04be7b0ccd178df");
    /// ```
    #[clap(verbatim_doc_comment)]
    Decode {
        /// The LNURL, optionally prefixed by `lightning:`, `-` to read it from standard input
        lnurl: String,
    },

    /// Given the json returned by the LNURL-pay endpoint of a lightning address, print the
    /// callback url to request an invoice of `amount` sats
    ///
    /// ```
    /// # use zapdesk::test_util::*;
    /// let stdin = r#"{"callback":"https://example.com/pay/alice","minSendable":1000,"maxSendable":1000000000,"metadata":"[]","tag":"payRequest"}"#;
    /// let stdout = sh(stdin, "zapdesk invoice-url - --amount 100");
    /// assert_eq!(stdout, "https://example.com/pay/alice?amount=100000");
    /// ```
    #[clap(verbatim_doc_comment)]
    InvoiceUrl {
        /// File containing the json response, `-` for standard input
        file: PathBuf,

        /// Amount in satoshis
        #[arg(short, long)]
        amount: u64,
    },

    /// Given the json returned by the LNURL-pay callback, print the `lightning:` URI of the invoice
    ///
    /// ```
    /// # use zapdesk::test_util::*;
    /// let stdout = sh(r#"{"pr":"lnbc10u1xyz","routes":[]}"#, "zapdesk invoice -");
    /// assert_eq!(stdout, "lightning:lnbc10u1xyz");
    /// ```
    #[clap(verbatim_doc_comment)]
    Invoice {
        /// File containing the json response, `-` for standard input
        file: PathBuf,
    },

    /// Print a localized summary to tip an agent: one LNURL for the given amount, or one for
    /// every preset amount
    ///
    /// The agent may be given as the json user document of the ticket platform, in which case
    /// name and lightning address are taken from there.
    ///
    /// ```
    /// # use zapdesk::test_util::*;
    /// let stdout = sh("", "zapdesk tip alice@example.com --amount 1000 --agent-name Alice --locale es");
    /// let lines: Vec<_> = stdout.lines().collect();
    /// assert_eq!(lines[0], "Dale una propina en sats a Alice");
    /// assert_eq!(lines[1], "Escanea con una billetera Lightning para enviar 1000 sats");
    /// assert_eq!(lines[2], "lnurl1dp68gurn8ghj7etcv9khqmr99e3k7mf09emk2mrv944kummhdchkcmn4wfk8qtmpd35kxeflv9kk7atwws7nzvpsxqcrqvqshuz0r");
    ///
    /// let stdin = r#"{"user":{"id":1,"name":"Bob","user_fields":{"lightning_address":"bob@example.com"}}}"#;
    /// let stdout = sh(stdin, "zapdesk tip --assignee-file - --locale en");
    /// assert!(stdout.starts_with("Tip Bob with sats\n100 sats: lnurl1"));
    /// ```
    #[clap(verbatim_doc_comment)]
    Tip {
        /// The lightning address of the agent, `-` to read it from standard input
        #[arg(env = "ZAPDESK_LIGHTNING_ADDRESS")]
        address: Option<String>,

        /// Json user document of the agent, `-` for standard input, takes precedence over the address
        #[arg(long)]
        assignee_file: Option<PathBuf>,

        /// Name of the agent
        #[arg(long)]
        agent_name: Option<String>,

        /// Tip amount in satoshis, if missing preset amounts are printed
        #[arg(short, long)]
        amount: Option<u64>,

        /// Print also a QR code of the LNURL, used only with an amount
        #[arg(long)]
        qr: bool,
    },

    /// Print the json updating a ticket with the comment that records a tip
    ///
    /// ```
    /// # use zapdesk::test_util::*;
    /// let stdout = sh("", "zapdesk comment --amount 1000 --agent-name Alice --address alice@example.com");
    /// assert_eq!(stdout, r#"{"ticket":{"comment":{"body":"Tip: 1000 sats\nAgent: Alice\nMessage: (none)\nLightning Address: alice@example.com","public":true}}}"#);
    /// let err = sh_err("", "zapdesk comment --amount 0 --agent-name Alice --address alice@example.com");
    /// assert_eq!(err, "No tip amount selected");
    /// let err = sh_err("", "zapdesk comment --amount 0 --agent-name Alice --address alice@example.com --locale es");
    /// assert_eq!(err, "No se seleccionó un monto de propina");
    /// let err = sh_err("", "zapdesk comment --amount 10 --agent-name Alice --address alice --locale es");
    /// assert_eq!(err, "Lightning Address inválida: alice");
    /// ```
    #[clap(verbatim_doc_comment)]
    Comment {
        /// Tip amount in satoshis
        #[arg(short, long)]
        amount: u64,

        /// Name of the agent receiving the tip
        #[arg(long, required = true)]
        agent_name: String,

        /// Lightning address of the agent, `-` to read it from standard input
        #[arg(long, env = "ZAPDESK_LIGHTNING_ADDRESS")]
        address: String,

        /// Optional message from the user
        #[arg(short, long)]
        message: Option<String>,

        /// Record the comment as private
        #[arg(long, env = "ZAPDESK_PRIVATE_COMMENTS")]
        private_comments: bool,
    },

    /// Convert the text content of `file` into a number of QR codes of the given version
    ///
    /// ```
    /// # use zapdesk::test_util::*;
    /// let lnurls = sh("", "zapdesk tip alice@example.com").to_ascii_uppercase();
    /// let stdout = sh(&lnurls, "zapdesk qr - --qr-version 10 --empty-lines 1");
    /// assert!(stdout.contains("(1/"));
    /// assert!(!stdout.contains("LNURL"));
    /// let stdout = sh("LNURL", "zapdesk qr -");
    /// assert!(stdout.contains("(1/1)"));
    /// ```
    #[clap(verbatim_doc_comment)]
    Qr {
        /// File to encode, `-` for standard input
        file: PathBuf,

        /// QR code version
        #[arg(long, default_value_t = 16)]
        qr_version: i16,

        /// Module at the border of the QR code
        #[arg(long, default_value_t = QR_BORDER)]
        border: u8,

        /// Number of empty lines between one QR and the following
        #[arg(long, default_value_t = 6)]
        empty_lines: u8,
    },

    #[clap(hide = true)]
    GenerateCompletion { shell: Shell },
}
