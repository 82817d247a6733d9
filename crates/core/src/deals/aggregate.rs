//! Aggregate derivations over a deal snapshot
//!
//! Pure functions: they take whatever slice of deals the caller read from the
//! store and never cache anything. Sums are exact; a total that leaves the
//! decimal range is an error rather than a clamped value.

use std::collections::HashMap;

use dealdesk_domain::{
    ClientAggregate, ClientSummary, Deal, DealAmount, DealDeskError, DealStage, PipelineSummary,
    Result, StageTotal,
};

fn add_amounts(total: DealAmount, amount: DealAmount) -> Result<DealAmount> {
    total
        .checked_add(amount)
        .ok_or_else(|| DealDeskError::Internal("deal amount total overflowed".to_string()))
}

/// Exact sum of `deal_amount` over `deals`.
///
/// # Errors
/// `DealDeskError::Internal` if the total exceeds the decimal range.
pub fn total_amount<'a, I>(deals: I) -> Result<DealAmount>
where
    I: IntoIterator<Item = &'a Deal>,
{
    deals.into_iter().try_fold(DealAmount::ZERO, |total, deal| add_amounts(total, deal.deal_amount))
}

/// Deals currently in `stage`, in snapshot order.
pub fn deals_in_stage(deals: &[Deal], stage: DealStage) -> Vec<&Deal> {
    deals.iter().filter(|deal| deal.stage == stage).collect()
}

/// Group deals by exact `client_name`.
///
/// One pass over `deals`; groups come out in order of each name's first
/// occurrence.
pub fn group_by_client(deals: &[Deal]) -> Result<Vec<ClientAggregate>> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ClientAggregate> = Vec::new();

    for deal in deals {
        let index = *positions.entry(deal.client_name.as_str()).or_insert_with(|| {
            groups.push(ClientAggregate {
                name: deal.client_name.clone(),
                total_deals: 0,
                total_amount: DealAmount::ZERO,
            });
            groups.len() - 1
        });

        let group = &mut groups[index];
        group.total_deals += 1;
        group.total_amount = add_amounts(group.total_amount, deal.deal_amount)?;
    }

    Ok(groups)
}

/// Detail rollup for one client, or `None` if no deal carries that name.
pub fn summarize_client(name: &str, deals: &[Deal]) -> Result<Option<ClientSummary>> {
    let client_deals: Vec<&Deal> = deals.iter().filter(|deal| deal.client_name == name).collect();
    if client_deals.is_empty() {
        return Ok(None);
    }

    let finished: Vec<&Deal> =
        client_deals.iter().copied().filter(|deal| deal.stage == DealStage::Finished).collect();

    Ok(Some(ClientSummary {
        name: name.to_string(),
        total_deals: client_deals.len(),
        total_amount: total_amount(client_deals.iter().copied())?,
        finished_deals: finished.len(),
        total_paid: total_amount(finished)?,
    }))
}

/// Partition the snapshot by stage.
pub fn summarize_pipeline(deals: &[Deal]) -> Result<PipelineSummary> {
    let stages = DealStage::ALL
        .iter()
        .map(|&stage| -> Result<StageTotal> {
            let in_stage = deals_in_stage(deals, stage);
            Ok(StageTotal { stage, deals: in_stage.len(), amount: total_amount(in_stage)? })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(PipelineSummary { total_deals: deals.len(), total_amount: total_amount(deals)?, stages })
}
