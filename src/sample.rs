/// Two statements exercising comments, schema-qualified names, joins and UNION.
pub const SAMPLE_QUERY: &str = r#"
    -- Sample SQL query to test table extraction
    SELECT e.employee_id, e.first_name, d.department_name, l.city
    FROM dbo.employees e
    JOIN dbo.departments d ON e.department_id = d.department_id
    LEFT JOIN locations l ON d.location_id = l.location_id
    WHERE e.salary > 50000
    ORDER BY e.last_name;

    -- Another example with UNION
    SELECT customer_id, order_id
    FROM prd.orders
    WHERE order_date >= '2023-01-01'
    UNION
    SELECT customer_id, order_id
    FROM archived_orders
    WHERE order_date >= '2023-01-01';
"#;
