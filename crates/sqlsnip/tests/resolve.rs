//! End-to-end template resolution against a builder with registered snippets.

use sqlsnip::{
    BuildError, ClauseMode, Dialect, MySql, Postgres, SqlBuilder, Template, Value, params,
};

fn users_builder() -> SqlBuilder {
    let mut builder = SqlBuilder::new(Postgres);
    builder
        .clauses("WHERE", " AND ", "WHERE ", "")
        .add_clause("status = @s:status@", params!(), ClauseMode::Required)
        .add_clause("age >= @i:min_age@", params!(), ClauseMode::Required)
        .add_clause("email = @s:contact@", params!(), ClauseMode::Alternative)
        .add_clause("phone = @s:contact@", params!(), ClauseMode::Alternative);
    builder
}

#[test]
fn markers_substitute_in_left_to_right_order() {
    let builder = SqlBuilder::new(Postgres);
    let stmt = builder
        .resolve(
            "SELECT * FROM t WHERE a=@i:x@ AND b=@s:y@",
            params! { "x" => 5, "y" => "z" },
        )
        .unwrap();

    assert_eq!(stmt.sql, "SELECT * FROM t WHERE a=$1 AND b=$2");
    assert_eq!(stmt.types, "is");
    assert_eq!(stmt.values, vec![Value::Int(5), Value::Text("z".to_string())]);
}

#[test]
fn repeated_name_binds_value_per_occurrence() {
    let builder = SqlBuilder::new(Postgres);
    let stmt = builder
        .resolve("a=@s:n@ OR b=@s:n@", params! { "n" => "v" })
        .unwrap();

    // Each occurrence gets its own placeholder token and its own value slot.
    assert_eq!(stmt.sql, "a=$1 OR b=$2");
    assert_eq!(stmt.types, "ss");
    assert_eq!(
        stmt.values,
        vec![Value::Text("v".to_string()), Value::Text("v".to_string())]
    );
}

#[test]
fn clause_filtering_drops_absent_conditions_end_to_end() {
    let builder = users_builder();
    let stmt = builder
        .resolve(
            "SELECT * FROM users /** WHERE **/ ORDER BY id",
            params! { "status" => "active" },
        )
        .unwrap();

    assert_eq!(
        stmt.sql,
        "SELECT * FROM users WHERE status = $1 ORDER BY id"
    );
    assert_eq!(stmt.types, "s");
    assert_eq!(stmt.values, vec![Value::Text("active".to_string())]);
}

#[test]
fn alternative_clauses_render_as_or_group() {
    let builder = users_builder();
    let stmt = builder
        .resolve(
            "SELECT * FROM users /** WHERE **/",
            params! { "status" => "active", "contact" => "a@example.org" },
        )
        .unwrap();

    assert_eq!(
        stmt.sql,
        "SELECT * FROM users WHERE status = $1 AND  ( email = $2 OR phone = $3 ) "
    );
    assert_eq!(stmt.types, "sss");
    // Both OR branches bind the same runtime value.
    assert_eq!(stmt.values[1], stmt.values[2]);
}

#[test]
fn empty_clause_set_omits_where_scaffold() {
    let builder = users_builder();
    let stmt = builder
        .resolve("SELECT * FROM users /** WHERE **/", params!())
        .unwrap();

    assert_eq!(stmt.sql, "SELECT * FROM users ");
    assert_eq!(stmt.types, "");
    assert!(stmt.values.is_empty());
}

#[test]
fn clause_literal_value_wins_over_runtime_value() {
    let mut builder = SqlBuilder::new(Postgres);
    builder.clauses("WHERE", " AND ", "WHERE ", "").add_clause(
        "tenant = @s:tenant@",
        params! { "tenant" => "pinned" },
        ClauseMode::Required,
    );

    let stmt = builder
        .resolve(
            "SELECT * FROM t /** WHERE **/",
            params! { "tenant" => "runtime" },
        )
        .unwrap();

    assert_eq!(stmt.values, vec![Value::Text("pinned".to_string())]);
}

#[test]
fn missing_parameter_is_a_hard_failure() {
    let builder = SqlBuilder::new(Postgres);
    let err = builder
        .resolve("a=@i:x@ AND b=@s:y@", params! { "x" => 1 })
        .unwrap_err();

    assert_eq!(err, BuildError::missing_parameter("y", 2));
}

#[test]
fn unknown_snippet_is_a_hard_failure() {
    let builder = SqlBuilder::new(Postgres);
    let err = builder
        .resolve("SELECT * FROM t /** nope **/", params!())
        .unwrap_err();

    assert_eq!(err, BuildError::UnknownSnippet("nope".to_string()));
}

#[test]
fn snippet_expansion_is_single_level() {
    let mut builder = SqlBuilder::new(Postgres);
    builder.add_snippet("inner", "SHOULD NOT APPEAR");
    builder.add_snippet("outer", "expanded /**inner**/");

    let stmt = builder.resolve("/** outer **/", params!()).unwrap();

    // The body is inserted verbatim; references inside it are not re-expanded.
    assert_eq!(stmt.sql, "expanded /**inner**/");
}

#[test]
fn malformed_markers_pass_through_untouched() {
    let builder = SqlBuilder::new(Postgres);
    let stmt = builder
        .resolve("a=@s:ok@ AND broken=@s:oops", params! { "ok" => 1 })
        .unwrap();

    assert_eq!(stmt.sql, "a=$1 AND broken=@s:oops");
    assert_eq!(stmt.types, "s");
}

#[test]
fn marker_ordering_spans_expanded_snippets() {
    let mut builder = SqlBuilder::new(Postgres);
    builder.add_snippet("more", "AND b=@s:b@");

    let stmt = builder
        .resolve(
            "SELECT * FROM t WHERE a=@i:a@ /** more **/",
            params! { "a" => 1, "b" => "x" },
        )
        .unwrap();

    assert_eq!(stmt.sql, "SELECT * FROM t WHERE a=$1 AND b=$2");
    assert_eq!(stmt.types, "is");
    assert_eq!(stmt.values, vec![Value::Int(1), Value::Text("x".to_string())]);
}

#[test]
fn resolution_is_idempotent() {
    let builder = users_builder();
    let template = builder.template("SELECT * FROM users /** WHERE **/");
    let runtime = params! { "status" => "active", "min_age" => 21 };

    let first = template.resolve(&builder, runtime.clone()).unwrap();
    let second = template.resolve(&builder, runtime).unwrap();
    assert_eq!(first, second);
}

#[test]
fn mysql_dialect_renders_anonymous_placeholders() {
    let mut builder = SqlBuilder::new(MySql);
    builder
        .clauses("WHERE", " AND ", "WHERE ", "")
        .add_clause("a = @i:a@", params!(), ClauseMode::Required)
        .add_clause("b = @s:b@", params!(), ClauseMode::Required);

    let stmt = builder
        .resolve(
            "SELECT * FROM t /** WHERE **/",
            params! { "a" => 1, "b" => "x" },
        )
        .unwrap();

    assert_eq!(stmt.sql, "SELECT * FROM t WHERE a = ? AND b = ?");
    assert_eq!(stmt.types, "is");
}

#[test]
fn named_dialects_see_ordinal_type_and_name() {
    // A dialect that encodes everything it is given, to pin down the
    // collaborator contract: fresh ordinal per occurrence, marker type and
    // name forwarded as written.
    struct Recording;

    impl Dialect for Recording {
        fn parameter(&self, ordinal: usize, ty: char, name: &str) -> String {
            format!(":{name}_{ty}{ordinal}")
        }
    }

    let builder = SqlBuilder::new(Recording);
    let stmt = builder
        .resolve("a=@s:n@ OR b=@s:n@", params! { "n" => "v" })
        .unwrap();

    assert_eq!(stmt.sql, "a=:n_s1 OR b=:n_s2");
}

#[test]
fn templates_resolve_through_the_builder_trait() {
    let builder = users_builder();
    let template = Template::new("SELECT count(*) FROM users /** WHERE **/");

    let stmt = template
        .resolve(&builder, params! { "min_age" => 18 })
        .unwrap();

    assert_eq!(stmt.sql, "SELECT count(*) FROM users WHERE age >= $1");
    assert_eq!(stmt.values, vec![Value::Int(18)]);
}
