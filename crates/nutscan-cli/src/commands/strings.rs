use anyhow::Result;
use clap::Args;
use nutscan_core::i18n::{Language, TextKey};

#[derive(Args)]
pub struct StringsArgs {
    /// Language to print (en or tr)
    #[arg(long, default_value = "en")]
    pub lang: Language,
}

pub fn run(args: &StringsArgs) -> Result<()> {
    let strings = args.lang.strings();
    for key in TextKey::ALL {
        println!("{:<22}{}", key.name(), strings.get(key));
    }
    Ok(())
}
