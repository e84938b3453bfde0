use clap::ValueEnum;
use strum::{Display, IntoStaticStr, VariantArray};

/// List views known to the command line front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ViewKind {
    Projects,
    Contracts,
    Proposals,
    Milestones,
    Invoices,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, VariantArray, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum ProjectColumn {
    Title,
    Status,
    Budget,
    PaymentType,
    Deadline,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, VariantArray, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum ContractColumn {
    Title,
    Status,
    Budget,
    StartDate,
    EndDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, VariantArray, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum ProposalColumn {
    Status,
    BidAmount,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, VariantArray, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum MilestoneColumn {
    Title,
    Status,
    Amount,
    DueDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, VariantArray, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum InvoiceColumn {
    Number,
    Status,
    Amount,
    DueDate,
}
