//! Conversions between domain types and the DTOs in the `shared` crate.

use crate::domain::balance_service::{BalanceRow, BalanceSheet};
use crate::domain::models::entry::LedgerEntry;
use crate::domain::stats_service::{
    CardPaymentRow, DailyStats, OnlinePaymentRow, PaymentRow, PaymentTotals, RiderTotals,
};
use shared::{
    BalanceRowDto, BalanceSheetResponse, CardPaymentRowDto, DailyStatsResponse, LedgerEntryDto,
    OnlinePaymentRowDto, PaymentRowDto, PaymentTotalsDto, RiderTotalsDto,
};

pub struct EntryMapper;

impl EntryMapper {
    pub fn to_dto(entry: LedgerEntry) -> LedgerEntryDto {
        LedgerEntryDto {
            name: entry.name,
            phone: entry.phone,
            delivery_address: entry.delivery_address,
            fare: entry.fare,
            fare_paid_online: entry.fare_paid_online,
            cash: entry.cash,
            online: entry.online,
            credit_card: entry.credit_card,
            card_last_digits: entry.card_last_digits,
            rider: entry.rider.to_string(),
        }
    }
}

pub struct StatsMapper;

impl StatsMapper {
    pub fn to_dto(stats: DailyStats) -> DailyStatsResponse {
        DailyStatsResponse {
            rider_totals: stats
                .rider_totals
                .into_iter()
                .map(Self::rider_totals_to_dto)
                .collect(),
            cash: Self::payment_totals_to_dto(stats.cash),
            online: Self::payment_totals_to_dto(stats.online),
            card_payments: stats
                .card_payments
                .into_iter()
                .map(Self::card_row_to_dto)
                .collect(),
            card_payments_total: stats.card_payments_total,
            online_payments: stats
                .online_payments
                .into_iter()
                .map(Self::online_row_to_dto)
                .collect(),
            online_payments_total: stats.online_payments_total,
        }
    }

    fn rider_totals_to_dto(totals: RiderTotals) -> RiderTotalsDto {
        RiderTotalsDto {
            rider: totals.rider,
            fare: totals.fare,
            cash: totals.cash,
            online: totals.online,
            credit_card: totals.credit_card,
        }
    }

    fn payment_totals_to_dto(totals: PaymentTotals) -> PaymentTotalsDto {
        PaymentTotalsDto {
            rows: totals.rows.into_iter().map(Self::payment_row_to_dto).collect(),
            total: totals.total,
        }
    }

    fn payment_row_to_dto(row: PaymentRow) -> PaymentRowDto {
        PaymentRowDto {
            rider: row.rider,
            amount: row.amount,
        }
    }

    fn card_row_to_dto(row: CardPaymentRow) -> CardPaymentRowDto {
        CardPaymentRowDto {
            name: row.name,
            card_last_digits: row.card_last_digits,
            amount: row.amount,
        }
    }

    fn online_row_to_dto(row: OnlinePaymentRow) -> OnlinePaymentRowDto {
        OnlinePaymentRowDto {
            name: row.name,
            amount: row.amount,
        }
    }
}

pub struct BalanceMapper;

impl BalanceMapper {
    pub fn to_dto(sheet: BalanceSheet) -> BalanceSheetResponse {
        BalanceSheetResponse {
            opening_balance: sheet.opening_balance,
            rows: sheet.rows.into_iter().map(Self::row_to_dto).collect(),
            closing_balance: sheet.closing_balance,
            total_cash_in: sheet.total_cash_in,
            total_cash_out: sheet.total_cash_out,
            total_online: sheet.total_online,
        }
    }

    fn row_to_dto(row: BalanceRow) -> BalanceRowDto {
        BalanceRowDto {
            name: row.name,
            running_balance: row.running_balance,
            cash_in: row.cash_in,
            cash_out: row.cash_out,
            online: row.online,
        }
    }
}
