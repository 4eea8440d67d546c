//! SQL query templates and builders
//!
//! Contains every statement the API runs. Money and aggregate columns are
//! selected as `::text` so their exact decimal value reaches the client.

use super::QueryBuilder;

/// Balance figures, one row per company and year
pub const BALANCES: &str = r#"
    SELECT
        b.company_name,
        b.year::int AS year,
        b.revenue::text AS revenue,
        b.ebitda::text AS ebitda,
        b.net_income::text AS net_income
    FROM balances b
"#;

/// Campaign count joined to the owning company
pub const CAMPAIGNS_COUNT: &str = r#"
    SELECT COUNT(*) AS total
    FROM campaigns c
    JOIN companies co ON co.id = c.company_id
"#;

/// Campaign rows joined to the owning company
pub const CAMPAIGNS: &str = r#"
    SELECT
        c.id::int AS id,
        co.nome AS company_name,
        c.titulo,
        c.data_veiculacao,
        c.valor_investido::text AS valor_investido,
        c.retorno::text AS retorno
    FROM campaigns c
    JOIN companies co ON co.id = c.company_id
"#;

/// All companies
pub const COMPANIES: &str = r#"
    SELECT co.id::int AS id, co.nome, co.area, co.descricao
    FROM companies co
"#;

/// Monthly lease lines
pub const LEASES: &str = r#"
    SELECT
        co.nome AS company_name,
        l.year::int AS year,
        l.month::int AS month,
        l.amount_paid::text AS amount_paid,
        l.machines_count::int AS machines_count
    FROM leases l
    JOIN companies co ON co.id = l.company_id
"#;

/// Lease lines ranked by amount paid within each year; closed by `RANKED_TOP`
pub const LEASES_RANKED: &str = r#"
    SELECT company_name, year, month, amount_paid, machines_count
    FROM (
        SELECT
            co.nome AS company_name,
            l.year::int AS year,
            l.month::int AS month,
            l.amount_paid::text AS amount_paid,
            l.machines_count::int AS machines_count,
            ROW_NUMBER() OVER (
                PARTITION BY l.year
                ORDER BY l.amount_paid DESC NULLS LAST, l.month DESC, l.company_id ASC
            ) AS rn
        FROM leases l
        JOIN companies co ON co.id = l.company_id
"#;

/// Realized revenue per year for one company's clients
pub const CLIENT_REVENUE: &str = r#"
    SELECT
        cp.year::int AS year,
        SUM(cp.realized)::text AS faturamento
    FROM client_performance cp
    JOIN companies co ON co.id = cp.company_id
"#;

/// Client performance rows
pub const CLIENTS: &str = r#"
    SELECT
        co.nome AS company_name,
        cp.client_name,
        cp.year::int AS year,
        cp.planned::text AS planned,
        cp.realized::text AS realized,
        cp.commission_rate::text AS commission_rate,
        cp.commission_value::text AS commission_value
    FROM client_performance cp
    JOIN companies co ON co.id = cp.company_id
"#;

/// Client rows ranked by how far realized exceeded planned; closed by `RANKED_TOP`
pub const CLIENTS_RANKED_ABOVE_PLANNED: &str = r#"
    SELECT
        company_name, client_name, year, planned, realized,
        commission_rate, commission_value, above_planned
    FROM (
        SELECT
            co.nome AS company_name,
            cp.client_name,
            cp.year::int AS year,
            cp.planned::text AS planned,
            cp.realized::text AS realized,
            cp.commission_rate::text AS commission_rate,
            cp.commission_value::text AS commission_value,
            (cp.realized - cp.planned)::text AS above_planned,
            ROW_NUMBER() OVER (
                ORDER BY cp.realized - cp.planned DESC NULLS LAST, cp.year DESC, cp.client_name ASC
            ) AS rn
        FROM client_performance cp
        JOIN companies co ON co.id = cp.company_id
"#;

/// Client rows ranked by commission value; closed by `RANKED_TOP`
pub const CLIENTS_RANKED_COMMISSION_VALUE: &str = r#"
    SELECT
        company_name, client_name, year, planned, realized,
        commission_rate, commission_value
    FROM (
        SELECT
            co.nome AS company_name,
            cp.client_name,
            cp.year::int AS year,
            cp.planned::text AS planned,
            cp.realized::text AS realized,
            cp.commission_rate::text AS commission_rate,
            cp.commission_value::text AS commission_value,
            ROW_NUMBER() OVER (
                ORDER BY cp.commission_value DESC NULLS LAST, cp.year DESC, cp.client_name ASC
            ) AS rn
        FROM client_performance cp
        JOIN companies co ON co.id = cp.company_id
"#;

/// PR materials joined to the owning company
pub const PR_MATERIALS: &str = r#"
    SELECT
        pm.id::int AS id,
        co.nome AS company_name,
        pm.title,
        pm.publish_date,
        pm.created_at,
        pm.generated_value::text AS generated_value,
        pm.content
    FROM pr_materials pm
    JOIN companies co ON co.id = pm.company_id
"#;

/// Employees joined to the owning company
pub const EMPLOYEES: &str = r#"
    SELECT
        co.nome AS company_name,
        e.name,
        e.role,
        e.salary::text AS salary
    FROM employees e
    JOIN companies co ON co.id = e.company_id
"#;

/// Closes a ranked subquery and keeps the first row of each partition
const RANKED_TOP: &str = ") ranked WHERE rn = 1";

pub fn balance_by_company_year(company: &str, year: i32) -> QueryBuilder {
    QueryBuilder::new(BALANCES)
        .eq_ignore_case("b.company_name", company)
        .eq_int("b.year", year)
        .push("ORDER BY b.company_name")
}

pub fn all_balances() -> QueryBuilder {
    QueryBuilder::new(BALANCES).push("ORDER BY b.company_name, b.year")
}

pub fn campaigns_count(company: Option<&str>) -> QueryBuilder {
    QueryBuilder::new(CAMPAIGNS_COUNT).eq_ignore_case_opt("co.nome", company)
}

pub fn last_campaign(company: Option<&str>) -> QueryBuilder {
    QueryBuilder::new(CAMPAIGNS)
        .eq_ignore_case_opt("co.nome", company)
        .push("ORDER BY c.data_veiculacao DESC NULLS LAST, c.id DESC LIMIT 1")
}

pub fn companies() -> QueryBuilder {
    QueryBuilder::new(COMPANIES).push("ORDER BY co.id")
}

pub fn leases_monthly(year: Option<i32>, company: Option<&str>) -> QueryBuilder {
    QueryBuilder::new(LEASES)
        .eq_int_opt("l.year", year)
        .eq_ignore_case_opt("co.nome", company)
        .push("ORDER BY co.nome, l.year, l.month")
}

/// Highest `amount_paid` of the year; ties go to the later month, then the lower company id
pub fn lease_max(year: i32, company: Option<&str>) -> QueryBuilder {
    QueryBuilder::new(LEASES_RANKED)
        .eq_int("l.year", year)
        .eq_ignore_case_opt("co.nome", company)
        .push(RANKED_TOP)
}

pub fn client_revenue(company: &str, year: Option<i32>) -> QueryBuilder {
    QueryBuilder::new(CLIENT_REVENUE)
        .eq_ignore_case("co.nome", company)
        .eq_int_opt("cp.year", year)
        .push("GROUP BY cp.year ORDER BY cp.year")
}

pub fn top_commission_rate(company: &str) -> QueryBuilder {
    QueryBuilder::new(CLIENTS)
        .eq_ignore_case("co.nome", company)
        .push(
            "ORDER BY cp.commission_rate DESC NULLS LAST, cp.year DESC, cp.client_name ASC \
             LIMIT 1",
        )
}

pub fn most_above_planned(company: &str, year: Option<i32>) -> QueryBuilder {
    QueryBuilder::new(CLIENTS_RANKED_ABOVE_PLANNED)
        .eq_ignore_case("co.nome", company)
        .eq_int_opt("cp.year", year)
        .push(RANKED_TOP)
}

pub fn top_commission_value(company: &str, year: Option<i32>) -> QueryBuilder {
    QueryBuilder::new(CLIENTS_RANKED_COMMISSION_VALUE)
        .eq_ignore_case("co.nome", company)
        .eq_int_opt("cp.year", year)
        .push(RANKED_TOP)
}

pub fn last_pr_material(company: Option<&str>) -> QueryBuilder {
    QueryBuilder::new(PR_MATERIALS)
        .eq_ignore_case_opt("co.nome", company)
        .push(
            "ORDER BY pm.publish_date DESC NULLS LAST, pm.created_at DESC NULLS LAST, \
             pm.id DESC LIMIT 1",
        )
}

pub fn employees(company: &str) -> QueryBuilder {
    QueryBuilder::new(EMPLOYEES)
        .eq_ignore_case("co.nome", company)
        .push("ORDER BY e.name")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_balance_lookup_binds_both_keys() {
        let query = balance_by_company_year("Grupo WE", 2024);
        assert_eq!(query.param_count(), 2);
        assert!(query
            .sql()
            .contains("WHERE LOWER(b.company_name) = LOWER($1::text) AND b.year = $2::int"));
    }

    #[test]
    fn test_campaign_count_filter_is_optional() {
        let all = campaigns_count(None);
        assert_eq!(all.param_count(), 0);
        assert!(!all.sql().contains("WHERE"));

        let one = campaigns_count(Some("ACME"));
        assert_eq!(one.param_count(), 1);
        assert!(one.sql().ends_with("WHERE LOWER(co.nome) = LOWER($1::text)"));
    }

    #[test]
    fn test_last_campaign_has_stable_tie_break() {
        let query = last_campaign(Some("acme"));
        assert!(query
            .sql()
            .ends_with("ORDER BY c.data_veiculacao DESC NULLS LAST, c.id DESC LIMIT 1"));
        let where_at = query.sql().find("WHERE").unwrap();
        let order_at = query.sql().find("ORDER BY").unwrap();
        assert!(where_at < order_at);
    }

    #[test]
    fn test_lease_max_filters_inside_ranked_subquery() {
        let query = lease_max(2024, Some("Grupo WE"));
        let sql = query.sql();

        assert_eq!(query.param_count(), 2);
        assert!(sql.contains("PARTITION BY l.year"));
        assert!(sql.contains("WHERE l.year = $1::int AND LOWER(co.nome) = LOWER($2::text)"));
        assert!(sql.ends_with(") ranked WHERE rn = 1"));
    }

    #[test]
    fn test_leases_monthly_without_filters() {
        let query = leases_monthly(None, None);
        assert_eq!(query.param_count(), 0);
        assert!(query.sql().ends_with("ORDER BY co.nome, l.year, l.month"));
    }

    #[test]
    fn test_leases_monthly_with_year_only() {
        let query = leases_monthly(Some(2025), None);
        assert_eq!(query.param_count(), 1);
        assert!(query.sql().contains("WHERE l.year = $1::int ORDER BY"));
    }

    #[test]
    fn test_client_revenue_groups_by_year() {
        let query = client_revenue("acme", Some(2024));
        assert_eq!(query.param_count(), 2);
        assert!(query.sql().contains("SUM(cp.realized)::text AS faturamento"));
        assert!(query.sql().ends_with("GROUP BY cp.year ORDER BY cp.year"));
    }

    #[test]
    fn test_client_rankings_use_window_function() {
        for query in [
            most_above_planned("acme", None),
            top_commission_value("acme", Some(2024)),
        ] {
            assert!(query.sql().contains("ROW_NUMBER() OVER"));
            assert!(query.sql().ends_with("WHERE rn = 1"));
        }
        assert_eq!(most_above_planned("acme", None).param_count(), 1);
        assert_eq!(top_commission_value("acme", Some(2024)).param_count(), 2);
    }

    #[test]
    fn test_top_commission_rate_is_single_row() {
        let query = top_commission_rate("acme");
        assert!(query.sql().contains("cp.commission_rate DESC NULLS LAST"));
        assert!(query.sql().ends_with("LIMIT 1"));
    }

    #[test]
    fn test_last_pr_material_ordering() {
        let query = last_pr_material(None);
        assert_eq!(query.param_count(), 0);
        assert!(query.sql().ends_with(
            "ORDER BY pm.publish_date DESC NULLS LAST, pm.created_at DESC NULLS LAST, \
             pm.id DESC LIMIT 1"
        ));
    }

    #[test]
    fn test_date_columns_keep_native_types() {
        assert!(CAMPAIGNS.contains("c.data_veiculacao,"));
        assert!(PR_MATERIALS.contains("pm.publish_date,"));
        assert!(PR_MATERIALS.contains("pm.created_at,"));
        for template in [CAMPAIGNS, PR_MATERIALS] {
            assert!(!template.contains("::date"), "{template}");
            assert!(!template.contains("::timestamp"), "{template}");
        }
    }

    #[test]
    fn test_money_columns_are_selected_as_text() {
        for template in [BALANCES, CAMPAIGNS, LEASES, CLIENTS, PR_MATERIALS, EMPLOYEES] {
            assert!(template.contains("::text AS"), "{template}");
        }
    }

    #[test]
    fn test_company_filters_are_case_insensitive() {
        for query in [
            campaigns_count(Some("x")),
            last_campaign(Some("x")),
            leases_monthly(None, Some("x")),
            employees("x"),
            last_pr_material(Some("x")),
        ] {
            assert!(query.sql().contains("LOWER(co.nome) = LOWER($1::text)"));
        }
    }
}
