/// How a field participates in the monthly summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    Income,
    PreTax,
    Taxes,
    Irresponsible,
    Responsible,
    Savings,
    Bonus,
}

impl FieldGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::PreTax => "Pre-Tax Deductions",
            Self::Taxes => "Taxes",
            Self::Irresponsible => "Irresponsible Spending",
            Self::Responsible => "Responsible Spending",
            Self::Savings => "Savings",
            Self::Bonus => "Bonus Spending",
        }
    }

    /// Form section order.
    pub fn all() -> &'static [FieldGroup] {
        &[
            Self::Income,
            Self::PreTax,
            Self::Taxes,
            Self::Responsible,
            Self::Bonus,
            Self::Irresponsible,
            Self::Savings,
        ]
    }

    pub fn fields(self) -> impl Iterator<Item = BudgetField> {
        BudgetField::all()
            .iter()
            .copied()
            .filter(move |f| f.group() == self)
    }
}

impl std::fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const FIELD_COUNT: usize = 34;

/// One line of the monthly budget form.
///
/// Income fields are annual amounts; everything else is monthly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetField {
    Salary,
    Stock,
    InterestIncomeDividends,
    Monthly401kContribution,
    MonthlyFederalTaxes,
    MonthlyStateTaxes,
    MonthlyCityTaxes,
    FunRandom,
    Alcohol,
    Ubers,
    Other,
    Rent,
    Groceries,
    Utilities,
    StudentLoans,
    CreditCardDebt,
    Robinhood,
    Laundry,
    Car,
    PublicTransportation,
    DogCare,
    Savings401k,
    SavingsCash,
    SavingsRothIra,
    SavingsStocks,
    EatingOutRestaurants,
    Travel,
    GymFitness,
    Bathhouse,
    Hair,
    Nails,
    Skincare,
    Clothes,
    Coffee,
}

impl BudgetField {
    pub fn all() -> &'static [BudgetField; FIELD_COUNT] {
        &[
            Self::Salary,
            Self::Stock,
            Self::InterestIncomeDividends,
            Self::Monthly401kContribution,
            Self::MonthlyFederalTaxes,
            Self::MonthlyStateTaxes,
            Self::MonthlyCityTaxes,
            Self::FunRandom,
            Self::Alcohol,
            Self::Ubers,
            Self::Other,
            Self::Rent,
            Self::Groceries,
            Self::Utilities,
            Self::StudentLoans,
            Self::CreditCardDebt,
            Self::Robinhood,
            Self::Laundry,
            Self::Car,
            Self::PublicTransportation,
            Self::DogCare,
            Self::Savings401k,
            Self::SavingsCash,
            Self::SavingsRothIra,
            Self::SavingsStocks,
            Self::EatingOutRestaurants,
            Self::Travel,
            Self::GymFitness,
            Self::Bathhouse,
            Self::Hair,
            Self::Nails,
            Self::Skincare,
            Self::Clothes,
            Self::Coffee,
        ]
    }

    /// Position in [`BudgetField::all`]; used to index value arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Storage and form key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Stock => "stock",
            Self::InterestIncomeDividends => "interest_income_dividends",
            Self::Monthly401kContribution => "monthly_401k_contribution",
            Self::MonthlyFederalTaxes => "monthly_federal_taxes",
            Self::MonthlyStateTaxes => "monthly_state_taxes",
            Self::MonthlyCityTaxes => "monthly_city_taxes",
            Self::FunRandom => "fun_random",
            Self::Alcohol => "alcohol",
            Self::Ubers => "ubers",
            Self::Other => "other",
            Self::Rent => "rent",
            Self::Groceries => "groceries",
            Self::Utilities => "utilities",
            Self::StudentLoans => "student_loans",
            Self::CreditCardDebt => "credit_card_debt",
            Self::Robinhood => "robinhood",
            Self::Laundry => "laundry",
            Self::Car => "car",
            Self::PublicTransportation => "public_transportation",
            Self::DogCare => "dog_care",
            Self::Savings401k => "savings_401k",
            Self::SavingsCash => "savings_cash",
            Self::SavingsRothIra => "savings_roth_ira",
            Self::SavingsStocks => "savings_stocks",
            Self::EatingOutRestaurants => "eating_out_restaurants",
            Self::Travel => "travel",
            Self::GymFitness => "gym_fitness",
            Self::Bathhouse => "bathhouse",
            Self::Hair => "hair",
            Self::Nails => "nails",
            Self::Skincare => "skincare",
            Self::Clothes => "clothes",
            Self::Coffee => "coffee",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Salary => "Salary (annual)",
            Self::Stock => "Stock (annual)",
            Self::InterestIncomeDividends => "Interest & Dividends (annual)",
            Self::Monthly401kContribution => "401k Contribution",
            Self::MonthlyFederalTaxes => "Federal Taxes",
            Self::MonthlyStateTaxes => "State Taxes",
            Self::MonthlyCityTaxes => "City Taxes",
            Self::FunRandom => "Fun / Random",
            Self::Alcohol => "Alcohol",
            Self::Ubers => "Ubers",
            Self::Other => "Other",
            Self::Rent => "Rent",
            Self::Groceries => "Groceries",
            Self::Utilities => "Utilities",
            Self::StudentLoans => "Student Loans",
            Self::CreditCardDebt => "Credit Card Debt",
            Self::Robinhood => "Robinhood",
            Self::Laundry => "Laundry",
            Self::Car => "Car",
            Self::PublicTransportation => "Public Transportation",
            Self::DogCare => "Dog Care",
            Self::Savings401k => "401k",
            Self::SavingsCash => "Cash",
            Self::SavingsRothIra => "Roth IRA",
            Self::SavingsStocks => "Stocks",
            Self::EatingOutRestaurants => "Eating Out / Restaurants",
            Self::Travel => "Travel",
            Self::GymFitness => "Gym / Fitness",
            Self::Bathhouse => "Bathhouse",
            Self::Hair => "Hair",
            Self::Nails => "Nails",
            Self::Skincare => "Skincare",
            Self::Clothes => "Clothes",
            Self::Coffee => "Coffee",
        }
    }

    pub fn group(&self) -> FieldGroup {
        match self {
            Self::Salary | Self::Stock | Self::InterestIncomeDividends => FieldGroup::Income,
            Self::Monthly401kContribution => FieldGroup::PreTax,
            Self::MonthlyFederalTaxes | Self::MonthlyStateTaxes | Self::MonthlyCityTaxes => {
                FieldGroup::Taxes
            }
            Self::FunRandom | Self::Alcohol | Self::Ubers | Self::Other => {
                FieldGroup::Irresponsible
            }
            Self::Rent
            | Self::Groceries
            | Self::Utilities
            | Self::StudentLoans
            | Self::CreditCardDebt
            | Self::Robinhood
            | Self::Laundry
            | Self::Car
            | Self::PublicTransportation
            | Self::DogCare => FieldGroup::Responsible,
            Self::Savings401k | Self::SavingsCash | Self::SavingsRothIra | Self::SavingsStocks => {
                FieldGroup::Savings
            }
            Self::EatingOutRestaurants
            | Self::Travel
            | Self::GymFitness
            | Self::Bathhouse
            | Self::Hair
            | Self::Nails
            | Self::Skincare
            | Self::Clothes
            | Self::Coffee => FieldGroup::Bonus,
        }
    }

    /// Exact, case-sensitive key lookup. Unknown keys are not budget fields.
    pub fn parse(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.key() == key)
    }
}

impl std::fmt::Display for BudgetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
