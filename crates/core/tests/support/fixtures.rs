//! Deal input fixtures

use dealdesk_domain::{CreateDealInput, DealAmount, DealStage, MarketingService};

/// A creation request that passes boundary validation.
pub fn deal_input(client_name: &str, amount: u32) -> CreateDealInput {
    CreateDealInput {
        client_name: client_name.to_string(),
        contact_email: "john.doe@acme.com".to_string(),
        contact_phone: "+1-555-0123".to_string(),
        iban: "GB29 NWBK 6016 1331 9268 19".to_string(),
        cr_number: "CR-1010".to_string(),
        payment_notes: "Net 30 payment terms".to_string(),
        deal_amount: DealAmount::from(amount),
        stage: DealStage::FinancialDepartment,
        deal_description: "Annual enterprise licensing".to_string(),
        marketing_services: [MarketingService::Hungerstation, MarketingService::Keeta]
            .into_iter()
            .collect(),
    }
}
