//! Organization command

use log::debug;

use ghorg::error::Result;
use ghorg::models::OrgSummary;
use ghorg::output::Formattable;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;

/// Run the org command
pub fn show(opts: &GlobalOptions, org: Option<&str>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = ctx.client(org)?;

    debug!("Fetching organization {}", client.org_name());
    let summary = OrgSummary::from(client.org()?);

    summary.print(ctx.format)
}
