use chrono::Local;
use spendlog_core::{BudgetService, BudgetStatus};
use spendlog_domain::{format_money, ExpenseKind};
use tracing::info;

use crate::cli::dispatch::{parse_amount, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::errors::CommandError;

const FOOD_USAGE: &str = "food <amount> [date]";
const TRAVEL_USAGE: &str = "travel <amount> [date]";
const ADD_USAGE: &str = "add <category> <amount> [date]";
const BUDGET_USAGE: &str = "budget <amount>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("food", "Add a food expense", FOOD_USAGE, cmd_food).with_alias("1"),
        CommandEntry::new("travel", "Add a travel expense", TRAVEL_USAGE, cmd_travel)
            .with_alias("2"),
        CommandEntry::new("add", "Add an expense by category name", ADD_USAGE, cmd_add),
        CommandEntry::new(
            "budget",
            "Set the monthly budget (0 clears it)",
            BUDGET_USAGE,
            cmd_budget,
        )
        .with_alias("4"),
    ]
}

fn cmd_food(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    record_expense(context, ExpenseKind::Food, args, FOOD_USAGE)
}

fn cmd_travel(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    record_expense(context, ExpenseKind::Travel, args, TRAVEL_USAGE)
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = context.require_arg(args, 0, "Category", ADD_USAGE)?;
    let kind = ExpenseKind::from_label(&raw).ok_or_else(|| {
        let known: Vec<&str> = ExpenseKind::ALL.iter().map(|kind| kind.label()).collect();
        CommandError::InvalidArguments(format!(
            "Unknown category `{}`. Expected one of: {}",
            raw,
            known.join(", ")
        ))
    })?;
    record_expense(context, kind, args.get(1..).unwrap_or_default(), ADD_USAGE)
}

fn record_expense(
    context: &mut ShellContext,
    kind: ExpenseKind,
    args: &[&str],
    usage: &str,
) -> CommandResult {
    let raw = context.require_arg(args, 0, "Enter amount", usage)?;
    let amount = parse_amount(&raw)?;
    let date = args
        .get(1)
        .map(|value| (*value).to_string())
        .unwrap_or_else(today);

    let expense = context.session.service.record(kind, amount, &date)?;
    info!(
        category = expense.category(),
        amount = %expense.amount(),
        date = expense.date(),
        "expense recorded"
    );
    output::success("Expense added.");
    warn_if_over_budget(context);
    Ok(())
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = context.require_arg(args, 0, "Enter monthly budget", BUDGET_USAGE)?;
    let amount = parse_amount(&raw)?;
    BudgetService::set_monthly_budget(&mut context.session.user, amount)?;

    if amount.is_zero() {
        output::success("Monthly budget cleared.");
    } else {
        output::success(format!(
            "Monthly budget set to {}",
            format_money(context.currency_symbol(), amount)
        ));
        warn_if_over_budget(context);
    }
    Ok(())
}

fn warn_if_over_budget(context: &ShellContext) {
    let status = context.session.service.budget_status(&context.session.user);
    if let BudgetStatus::Exceeded {
        budget,
        spent,
        overage,
    } = status
    {
        let symbol = context.currency_symbol();
        output::warning(format!(
            "Budget exceeded! Spent {} of {} ({} over).",
            format_money(symbol, spent),
            format_money(symbol, budget),
            format_money(symbol, overage)
        ));
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
