use clap::Args;
use tiklens_engine::ListOrder;

#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    #[arg(long, default_value = "1", help = "Page number, starting at 1")]
    pub page: usize,

    #[arg(long, help = "Items per page (defaults to the configured size)")]
    pub page_size: Option<usize>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    #[arg(long, help = "Case-insensitive username substring")]
    pub search: Option<String>,

    #[arg(long, help = "Only on or after this date (YYYY-MM-DD or RFC 3339)")]
    pub since: Option<String>,

    #[arg(long, help = "Only on or before this date (YYYY-MM-DD or RFC 3339)")]
    pub until: Option<String>,

    #[arg(
        long,
        default_value = "-date",
        allow_hyphen_values = true,
        help = "-date, date, username or -username"
    )]
    pub order: ListOrder,

    #[command(flatten)]
    pub page: PageArgs,
}
