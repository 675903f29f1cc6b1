use super::*;
use crate::entity::FieldDescriptor;
use crate::jdbc::TypeMapping;
use crate::naming::ColumnNaming;
use chrono::NaiveDate;
use indexmap::IndexMap;

fn synth() -> Synthesizer {
    Synthesizer::new()
}

fn jan_15() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 15).unwrap()
}

struct Person {
    person_id: Option<i32>,
    name: Option<String>,
    weight: Option<f64>,
    birth_date: Option<NaiveDate>,
    password: Option<String>,
}

impl Entity for Person {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("personId", ValueKind::Integer),
        FieldDescriptor::new("name", ValueKind::Text),
        FieldDescriptor::new("weight", ValueKind::Float),
        FieldDescriptor::new("birthDate", ValueKind::Date),
        FieldDescriptor::new("password", ValueKind::Text).transient(),
    ];

    fn field_value(&self, name: &str) -> Value {
        match name {
            "personId" => Value::from(self.person_id),
            "name" => Value::from(self.name.clone()),
            "weight" => Value::from(self.weight),
            "birthDate" => Value::from(self.birth_date),
            _ => Value::Null,
        }
    }
}

fn full_person() -> Person {
    Person {
        person_id: Some(7),
        name: Some("Ada".into()),
        weight: Some(61.5),
        birth_date: Some(jan_15()),
        password: Some("secret".into()),
    }
}

// ==================== equality_select ====================

#[test]
fn test_equality_select() {
    let mut conditions = IndexMap::new();
    conditions.insert("NAME", "Ada");
    conditions.insert("STATUS", "A");
    conditions.insert("ROLE", "admin");
    let sql = synth().equality_select("*", "users", &conditions).unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM users WHERE NAME = 'Ada' AND STATUS = 'A' AND ROLE = 'admin'"
    );
    assert_eq!(sql.matches(" AND ").count(), conditions.len() - 1);
}

#[test]
fn test_equality_select_keeps_input_order() {
    let sql = synth()
        .equality_select("ID", "t", [("B", "2"), ("A", "1")])
        .unwrap();
    assert_eq!(sql, "SELECT ID FROM t WHERE B = '2' AND A = '1'");
}

#[test]
fn test_equality_select_no_conditions() {
    let sql = synth()
        .equality_select("*", "users", Vec::<(&str, &str)>::new())
        .unwrap();
    assert_eq!(sql, "SELECT * FROM users");
}

#[test]
fn test_equality_select_inlines_values_verbatim() {
    let sql = synth()
        .equality_select("*", "users", [("NAME", "O'Brien")])
        .unwrap();
    assert_eq!(sql, "SELECT * FROM users WHERE NAME = 'O'Brien'");
}

#[test]
fn test_equal_condition_and_all_columns() {
    assert_eq!(equal_condition("NAME", "Ana"), "NAME = 'Ana'");
    let sql = synth()
        .equality_select(ALL_COLUMNS, "users", [("NAME", "Ana")])
        .unwrap();
    assert_eq!(sql, format!("SELECT * FROM users WHERE {}", equal_condition("NAME", "Ana")));
}

#[test]
fn test_equality_select_validation() {
    assert!(synth().equality_select("*", "", [("A", "1")]).is_err());
    assert!(synth().equality_select("", "t", [("A", "1")]).is_err());
    assert!(synth().equality_select("*", "t", [("", "1")]).is_err());
    assert!(synth().equality_select("*", "t", [("A = 1 OR 1", "1")]).is_err());
}

#[test]
fn test_equality_select_bound() {
    let sql = synth()
        .equality_select_bound("*", "users", ["userName", "status"])
        .unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM users WHERE USER_NAME = #{userName} AND STATUS = #{status}"
    );
}

// ==================== like_select ====================

#[test]
fn test_like_select() {
    let sql = synth().like_select("*", "CITIES", "NAME").unwrap();
    assert_eq!(sql, "SELECT * FROM CITIES WHERE NAME LIKE #{attribute} || '%'");
}

#[test]
fn test_like_select_custom_placeholder() {
    let s = Synthesizer::with_config(SynthConfig::new().with_like_placeholder("prefix")).unwrap();
    let sql = s.like_select("ID, NAME", "CITIES", "NAME").unwrap();
    assert_eq!(sql, "SELECT ID, NAME FROM CITIES WHERE NAME LIKE #{prefix} || '%'");
}

#[test]
fn test_like_select_rejects_empty_column() {
    assert!(synth().like_select("*", "CITIES", "").is_err());
}

// ==================== delete_by_id ====================

#[test]
fn test_delete_by_id() {
    let sql = synth().delete_by_id("users", "userId").unwrap();
    assert_eq!(sql, "DELETE FROM users WHERE USER_ID=#{userId}");
}

#[test]
fn test_delete_by_id_upper_camel() {
    let sql = synth().delete_by_id("ADDRESSES", "AddressId").unwrap();
    assert_eq!(sql, "DELETE FROM ADDRESSES WHERE ADDRESS_ID=#{AddressId}");
}

#[test]
fn test_delete_by_id_acronym_columns() {
    let cases = [
        ("userID", "DELETE FROM t WHERE USER_I_D=#{userID}"),
        ("documentURL", "DELETE FROM t WHERE DOCUMENT_U_R_L=#{documentURL}"),
        ("HTTPCode", "DELETE FROM t WHERE H_T_T_P_CODE=#{HTTPCode}"),
    ];
    for (id, expected) in cases {
        assert_eq!(synth().delete_by_id("t", id).unwrap(), expected);
    }
}

#[test]
fn test_shouty_snake_naming_keeps_acronyms() {
    let s = Synthesizer::with_config(SynthConfig::new().with_naming(ColumnNaming::ShoutySnake))
        .unwrap();
    assert_eq!(
        s.delete_by_id("t", "userID").unwrap(),
        "DELETE FROM t WHERE USER_ID=#{userID}"
    );
}

#[test]
fn test_delete_by_id_validation() {
    assert!(synth().delete_by_id("", "userId").is_err());
    assert!(synth().delete_by_id("users", "").is_err());
}

// ==================== function_call ====================

#[test]
fn test_function_call_no_params() {
    assert_eq!(synth().function_call("NOW", &[]).unwrap(), "SELECT NOW( ) FROM DUAL");
}

#[test]
fn test_function_call_params() {
    assert_eq!(
        synth().function_call("NOW", &["1", "2"]).unwrap(),
        "SELECT NOW(1 , 2 ) FROM DUAL"
    );
    assert_eq!(
        synth().function_call("pkg.next_id", &["#{seq}"]).unwrap(),
        "SELECT pkg.next_id(#{seq} ) FROM DUAL"
    );
}

#[test]
fn test_function_call_custom_dual() {
    let s = Synthesizer::with_config(SynthConfig::new().with_dual_table("SYSIBM.SYSDUMMY1")).unwrap();
    assert_eq!(
        s.function_call("CURRENT_DATE", &[]).unwrap(),
        "SELECT CURRENT_DATE( ) FROM SYSIBM.SYSDUMMY1"
    );
}

#[test]
fn test_function_call_validation() {
    assert!(synth().function_call("", &[]).is_err());
    assert!(synth().function_call("1NOW", &[]).is_err());
}

#[test]
fn test_function_call_empty_params_verbatim() {
    assert_eq!(synth().function_call("NOW", &[""]).unwrap(), "SELECT NOW( ) FROM DUAL");
    assert_eq!(
        synth().function_call("NVL", &["", "0"]).unwrap(),
        "SELECT NVL( , 0 ) FROM DUAL"
    );
}

// ==================== insert_from_map ====================

#[test]
fn test_insert_from_map() {
    let sql = synth()
        .insert_from_map(
            "LOGINS",
            [
                ("LOGIN_ID", Some("#{loginId}")),
                ("CREATED", Some("SYSDATE")),
                ("LAST_SEEN", None),
                ("NOTE", Some("null")),
            ],
        )
        .unwrap();
    assert_eq!(
        sql,
        "INSERT INTO LOGINS (LOGIN_ID, CREATED, LAST_SEEN, NOTE) VALUES (#{loginId}, SYSDATE, NULL, NULL)"
    );
}

#[test]
fn test_insert_from_map_owned_values() {
    let mut values: IndexMap<String, Option<String>> = IndexMap::new();
    values.insert("NAME".into(), Some("'Ada'".into()));
    values.insert("AGE".into(), None);
    let sql = synth()
        .insert_from_map("people", values.iter().map(|(k, v)| (k, v.as_deref())))
        .unwrap();
    assert_eq!(sql, "INSERT INTO people (NAME, AGE) VALUES ('Ada', NULL)");
}

#[test]
fn test_insert_from_map_validation() {
    assert!(synth().insert_from_map("", [("A", Some("1"))]).is_err());
    assert!(synth().insert_from_map("t", [("bad key", Some("1"))]).is_err());
}

// ==================== insert_entity ====================

#[test]
fn test_insert_entity() {
    let sql = synth().insert_entity("PEOPLE", &full_person()).unwrap();
    assert_eq!(
        sql,
        "INSERT INTO PEOPLE (PERSON_ID, NAME, WEIGHT, BIRTH_DATE) VALUES (\
         #{personId,jdbcType=INTEGER}, #{name,jdbcType=VARCHAR}, \
         #{weight,jdbcType=INTEGER}, #{birthDate,jdbcType=DATE})"
    );
}

#[test]
fn test_insert_entity_skips_transient_and_absent() {
    let person = Person {
        name: None,
        birth_date: None,
        ..full_person()
    };
    let sql = synth().insert_entity("PEOPLE", &person).unwrap();
    assert_eq!(
        sql,
        "INSERT INTO PEOPLE (PERSON_ID, WEIGHT) VALUES (#{personId,jdbcType=INTEGER}, #{weight,jdbcType=INTEGER})"
    );
    assert!(!sql.contains("PASSWORD"));
    assert!(!sql.contains("password"));
}

#[test]
fn test_insert_entity_nothing_present() {
    let person = Person {
        person_id: None,
        name: None,
        weight: None,
        birth_date: None,
        password: Some("secret".into()),
    };
    assert_eq!(
        synth().insert_entity("PEOPLE", &person).unwrap(),
        "INSERT INTO PEOPLE DEFAULT VALUES"
    );
}

#[test]
fn test_entity_columns() {
    let specs = synth().entity_columns(&full_person());
    let tags: Vec<_> = specs.iter().map(|s| s.jdbc_type.as_str()).collect();
    assert_eq!(tags, ["INTEGER", "VARCHAR", "INTEGER", "DATE"]);
    assert_eq!(specs[3].value, Value::Date(jan_15()));
    assert_eq!(specs[3].column, "BIRTH_DATE");
    assert_eq!(specs[3].placeholder(), "#{birthDate,jdbcType=DATE}");
}

#[test]
fn test_insert_entity_custom_type_mapping() {
    let s = Synthesizer::with_config(
        SynthConfig::new().with_type_mapping(TypeMapping::default().with(ValueKind::Float, "DOUBLE")),
    )
    .unwrap();
    let sql = s.insert_entity("PEOPLE", &full_person()).unwrap();
    assert!(sql.contains("#{weight,jdbcType=DOUBLE}"));
}

// ==================== insert_from_typed_map ====================

#[test]
fn test_typed_map_inference() {
    let values = crate::value_map! {
        "loginId" => 42,
        "score" => 9.5,
        "userName" => "ada",
        "active" => true,
        "birthDate" => jan_15(),
    };
    let out = synth()
        .insert_from_typed_map("LOGINS", &values, &TypedInsertOptions::new())
        .unwrap();
    assert_eq!(
        out.sql,
        "INSERT INTO LOGINS (LOGIN_ID, SCORE, USER_NAME, ACTIVE, BIRTH_DATE) VALUES (\
         #{loginId,jdbcType=INTEGER}, #{score,jdbcType=INTEGER}, #{userName,jdbcType=VARCHAR}, \
         #{active,jdbcType=VARCHAR}, #{birthDate,jdbcType=DATE})"
    );
    assert!(!out.has_failures());
    assert_eq!(out.values, values);
}

#[test]
fn test_typed_map_date_override_coerces() {
    let values = crate::value_map! { "name" => "Ada", "birthDate" => "2020-01-15" };
    let options = TypedInsertOptions::new().override_type("birthDate", "DATE");
    let out = synth()
        .insert_from_typed_map("PEOPLE", &values, &options)
        .unwrap();

    assert!(out.sql.contains("BIRTH_DATE"));
    assert!(out.sql.contains("#{birthDate,jdbcType=DATE}"));
    assert_eq!(out.values["birthDate"], Value::Date(jan_15()));
    // input untouched, order kept
    assert_eq!(values["birthDate"], Value::from("2020-01-15"));
    let keys: Vec<_> = out.values.keys().map(String::as_str).collect();
    assert_eq!(keys, ["name", "birthDate"]);
}

#[test]
fn test_typed_map_date_parse_failure_is_non_fatal() {
    let values = crate::value_map! { "birthDate" => "15/01/2020", "name" => "Ada" };
    let options = TypedInsertOptions::new().override_type("birthDate", JdbcType::Date);
    let out = synth()
        .insert_from_typed_map("PEOPLE", &values, &options)
        .unwrap();

    assert_eq!(
        out.sql,
        "INSERT INTO PEOPLE (BIRTH_DATE, NAME) VALUES (#{birthDate,jdbcType=DATE}, #{name,jdbcType=VARCHAR})"
    );
    assert_eq!(out.values["birthDate"], Value::from("15/01/2020"));
    assert_eq!(out.failures.len(), 1);
    assert!(matches!(out.failures[0], GenqError::DateParse { .. }));
    assert_eq!(out.failures[0].key(), Some("birthDate"));
}

#[test]
fn test_typed_map_custom_date_format() {
    let values = crate::value_map! { "birthDate" => "15/01/2020" };
    let options = TypedInsertOptions::new()
        .override_type("birthDate", "DATE")
        .date_format("%d/%m/%Y");
    let out = synth()
        .insert_from_typed_map("PEOPLE", &values, &options)
        .unwrap();
    assert!(!out.has_failures());
    assert_eq!(out.values["birthDate"], Value::Date(jan_15()));
}

#[test]
fn test_typed_map_configured_date_format() {
    let s = Synthesizer::with_config(SynthConfig::new().with_date_format("%d.%m.%Y")).unwrap();
    let values = crate::value_map! { "birthDate" => "15.01.2020" };
    let options = TypedInsertOptions::new().override_type("birthDate", "DATE");
    let out = s.insert_from_typed_map("PEOPLE", &values, &options).unwrap();
    assert_eq!(out.values["birthDate"], Value::Date(jan_15()));
}

#[test]
fn test_typed_map_datetime_format() {
    let values = crate::value_map! { "createdAt" => "2020-01-15 08:30" };
    let options = TypedInsertOptions::new()
        .override_type("createdAt", "DATE")
        .date_format("%Y-%m-%d %H:%M");
    let out = synth()
        .insert_from_typed_map("EVENTS", &values, &options)
        .unwrap();
    assert_eq!(
        out.values["createdAt"],
        Value::DateTime(jan_15().and_hms_opt(8, 30, 0).unwrap())
    );
}

#[test]
fn test_typed_map_non_text_date_is_reported() {
    let values = crate::value_map! { "birthDate" => 20200115 };
    let options = TypedInsertOptions::new().override_type("birthDate", "DATE");
    let out = synth()
        .insert_from_typed_map("PEOPLE", &values, &options)
        .unwrap();
    assert!(out.sql.contains("#{birthDate,jdbcType=DATE}"));
    assert_eq!(out.values["birthDate"], Value::Int(20200115));
    assert!(matches!(
        out.failures[0],
        GenqError::Coercion { kind: ValueKind::Integer, .. }
    ));
}

#[test]
fn test_typed_map_skips_absent_null_and_ignored() {
    let values = crate::value_map! {
        "loginId" => 1,
        "nickname" => None::<String>,
        "middleName" => "null",
        "password" => "secret",
        "token" => "abc",
    };
    let options = TypedInsertOptions::new().ignore_all(["password", "token"]);
    let out = synth()
        .insert_from_typed_map("USERS", &values, &options)
        .unwrap();
    assert_eq!(
        out.sql,
        "INSERT INTO USERS (LOGIN_ID) VALUES (#{loginId,jdbcType=INTEGER})"
    );
    assert!(!out.sql.contains("PASSWORD"));
    assert!(!out.sql.contains("#{token"));
}

#[test]
fn test_typed_map_other_override_tag() {
    let values = crate::value_map! { "amount" => "10.50" };
    let options = TypedInsertOptions::new().override_type("amount", "NUMERIC");
    let out = synth()
        .insert_from_typed_map("PAYMENTS", &values, &options)
        .unwrap();
    assert_eq!(
        out.sql,
        "INSERT INTO PAYMENTS (AMOUNT) VALUES (#{amount,jdbcType=NUMERIC})"
    );
    assert_eq!(out.values["amount"], Value::from("10.50"));
}

#[test]
fn test_typed_map_validation() {
    let values = crate::value_map! { "bad key" => 1 };
    assert!(synth()
        .insert_from_typed_map("t", &values, &TypedInsertOptions::new())
        .is_err());
    assert!(synth()
        .insert_from_typed_map("", &crate::value_map! { "a" => 1 }, &TypedInsertOptions::new())
        .is_err());
}

#[test]
fn test_typed_map_verbatim_naming() {
    let s = Synthesizer::with_config(SynthConfig::new().with_naming(ColumnNaming::Verbatim)).unwrap();
    let out = s
        .insert_from_typed_map("t", &crate::value_map! { "loginId" => 1 }, &TypedInsertOptions::new())
        .unwrap();
    assert_eq!(out.sql, "INSERT INTO t (loginId) VALUES (#{loginId,jdbcType=INTEGER})");
}

// ==================== shared ====================

#[test]
fn test_parse_date_ignores_trailing_text() {
    assert_eq!(parse_date("2020-01-15T10:00:00", "%Y-%m-%d").unwrap(), Value::Date(jan_15()));
    assert!(parse_date("not a date", "%Y-%m-%d").is_err());
    assert!(parse_date("2021-02-30", "%Y-%m-%d").is_err());
}

#[test]
fn test_idempotent_output() {
    let s = synth();
    let values = crate::value_map! { "birthDate" => "2020-01-15", "id" => 3 };
    let options = TypedInsertOptions::new().override_type("birthDate", "DATE");

    let a = s.insert_from_typed_map("P", &values, &options).unwrap();
    let b = s.insert_from_typed_map("P", &values, &options).unwrap();
    assert_eq!(a.sql, b.sql);
    assert_eq!(a.values, b.values);

    assert_eq!(
        s.insert_entity("P", &full_person()).unwrap(),
        s.insert_entity("P", &full_person()).unwrap()
    );
    assert_eq!(
        s.equality_select("*", "t", [("A", "1")]).unwrap(),
        s.equality_select("*", "t", [("A", "1")]).unwrap()
    );
    assert_eq!(
        s.function_call("NOW", &["1"]).unwrap(),
        s.function_call("NOW", &["1"]).unwrap()
    );
}

#[test]
fn test_invalid_config_rejected() {
    assert!(Synthesizer::with_config(SynthConfig::new().with_dual_table("")).is_err());
}

#[test]
fn test_synthesizer_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Synthesizer>();
}
