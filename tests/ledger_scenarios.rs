use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use spendchart::ledger::{Amount, BudgetLedger, DisplaySlot, ExpenseCategory};

fn amount(value: Decimal) -> Amount {
    Amount::new(value).expect("non-negative amount")
}

fn fill(ledger: &mut BudgetLedger, values: [&str; 5]) {
    for (category, raw) in ExpenseCategory::ALL.into_iter().zip(values) {
        ledger.set_line_item(category, raw);
    }
}

#[test]
fn total_expenses_sum_entered_items() {
    let mut ledger = BudgetLedger::new();
    fill(&mut ledger, ["1200", "", "500", "200", ""]);
    assert_eq!(ledger.display().expenses, "$1900.00");
}

#[test]
fn balance_is_budget_minus_expenses() {
    let mut ledger = BudgetLedger::new();
    ledger.add_to_budget(amount(dec!(3000)));
    assert_eq!(ledger.display().budget, "$3000.00");

    ledger.set_line_item(ExpenseCategory::RentMortgage, "1200");
    ledger.set_line_item(ExpenseCategory::Groceries, "500");
    assert_eq!(ledger.display().balance, "$1300.00");
}

#[test]
fn complete_workflow_updates_every_slot() {
    let mut ledger = BudgetLedger::new();
    ledger.add_to_budget(amount(dec!(5000)));
    ledger.add_to_savings(amount(dec!(1500)));
    fill(&mut ledger, ["1500", "200", "600", "150", "100"]);

    let display = ledger.display();
    assert_eq!(display.slot(DisplaySlot::Budget), "$5000.00");
    assert_eq!(display.slot(DisplaySlot::Expenses), "$2550.00");
    assert_eq!(display.slot(DisplaySlot::Balance), "$2450.00");
    assert_eq!(display.slot(DisplaySlot::Savings), "$1500.00");
}

#[test]
fn re_editing_an_item_replaces_its_previous_value() {
    let mut ledger = BudgetLedger::new();
    ledger.add_to_budget(amount(dec!(2000)));
    ledger.set_line_item(ExpenseCategory::Groceries, "500");
    assert_eq!(ledger.display().balance, "$1500.00");

    ledger.set_line_item(ExpenseCategory::Groceries, "800");
    assert_eq!(ledger.display().balance, "$1200.00");
    assert_eq!(ledger.total_expenses().value(), dec!(800));
}

#[test]
fn repeating_the_same_edit_is_idempotent() {
    let mut ledger = BudgetLedger::new();
    ledger.add_to_budget(amount(dec!(900)));
    ledger.set_line_item(ExpenseCategory::Utilities, "150");
    let first = ledger.display();
    ledger.set_line_item(ExpenseCategory::Utilities, "150");
    assert_eq!(ledger.display(), first);
}

#[test]
fn typing_character_by_character_tracks_each_prefix() {
    let mut ledger = BudgetLedger::new();
    let mut typed = String::new();
    let mut observed = Vec::new();
    for ch in "12.5x".chars() {
        typed.push(ch);
        ledger.set_line_item(ExpenseCategory::Entertainment, &typed);
        observed.push(ledger.display().expenses);
    }
    assert_eq!(observed, ["$1.00", "$12.00", "$12.00", "$12.50", "$12.50"]);
}

#[test]
fn invalid_text_counts_as_zero() {
    let mut ledger = BudgetLedger::new();
    ledger.set_line_item(ExpenseCategory::RentMortgage, "1000");
    ledger.set_line_item(ExpenseCategory::RentMortgage, "abc");
    assert_eq!(ledger.display().expenses, "$0.00");
    ledger.set_line_item(ExpenseCategory::Transportation, "-40");
    assert_eq!(ledger.line_item(ExpenseCategory::Transportation).amount, Amount::ZERO);
}

#[test]
fn budget_additions_accumulate() {
    let mut ledger = BudgetLedger::new();
    ledger.add_to_budget(amount(dec!(1000)));
    ledger.add_to_budget(amount(dec!(250.75)));
    assert_eq!(ledger.display().budget, "$1250.75");
    assert_eq!(ledger.display().balance, "$1250.75");
}

#[test]
fn line_items_keep_fixed_labels_and_order() {
    let ledger = BudgetLedger::new();
    let labels: Vec<_> = ledger.line_items().iter().map(|item| item.label()).collect();
    assert_eq!(
        labels,
        ["Rent/Mortgage", "Utilities", "Groceries", "Transportation", "Entertainment"]
    );
}

#[test]
fn expenses_beyond_the_decimal_limit_still_render() {
    let mut ledger = BudgetLedger::new();
    fill(&mut ledger, ["3e28", "3e28", "3e28", "3e28", "3e28"]);
    let display = ledger.display();
    assert_eq!(display.expenses, "$79228162514264337593543950335.00");
    assert_eq!(display.balance, "$-79228162514264337593543950335.00");
}
