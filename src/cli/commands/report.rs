use spendlog_core::BudgetStatus;
use spendlog_domain::format_money;

use crate::cli::dispatch::CommandResult;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "List all expenses", "list", cmd_list).with_alias("3"),
        CommandEntry::new("total", "Show total spend", "total", cmd_total).with_alias("5"),
        CommandEntry::new(
            "summary",
            "Show per-category totals and budget status",
            "summary",
            cmd_summary,
        ),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let service = &context.session.service;
    if service.is_empty() {
        output::info("No expenses found.");
        return Ok(());
    }
    for line in service.display_lines(&context.config.currency_symbol) {
        output::plain(line);
    }
    Ok(())
}

fn cmd_total(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let total = context.session.service.total_expense();
    output::plain(format!(
        "Total: {}",
        format_money(context.currency_symbol(), total)
    ));
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let symbol = context.currency_symbol();
    let service = &context.session.service;

    output::section(format!("Summary for {}", context.session.user.name));
    let totals = service.totals_by_category();
    if totals.is_empty() {
        output::info("No expenses found.");
    }
    for entry in &totals {
        output::plain(format!(
            "  {:<8} {:>3} item(s)  {}",
            entry.kind.label(),
            entry.count,
            format_money(symbol, entry.total)
        ));
    }
    output::plain(format!(
        "  {:<8} {:>3} item(s)  {}",
        "Total",
        service.len(),
        format_money(symbol, service.total_expense())
    ));

    match service.budget_status(&context.session.user) {
        BudgetStatus::Unset { .. } => output::hint("No monthly budget set. Use `budget <amount>`."),
        BudgetStatus::Within {
            budget, remaining, ..
        } => output::info(format!(
            "Budget {}: {} remaining.",
            format_money(symbol, budget),
            format_money(symbol, remaining)
        )),
        BudgetStatus::Exceeded {
            budget, overage, ..
        } => output::warning(format!(
            "Budget {}: exceeded by {}.",
            format_money(symbol, budget),
            format_money(symbol, overage)
        )),
    }
    Ok(())
}
