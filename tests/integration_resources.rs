mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{FakeDb, TEST_USER_ID, error_code, send, setup_test_app, token_for};
use terra_canada::terra_db::SqlParam;

#[tokio::test]
async fn test_list_clientes_forwards_filters() {
    let db = FakeDb::new();
    db.respond("cliente_get_all", json!([{"id_cliente": 1, "nombre": "ACME"}]));
    let app = setup_test_app(db.clone());

    let token = token_for("Equipo", &["clientes.leer"]);
    let (status, body) = send(
        app,
        "GET",
        "/api/clientes?busqueda=acme&activo=true&limit=5&page=2",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["nombre"], "ACME");
    assert_eq!(
        db.params_of("cliente_get_all").unwrap(),
        vec![SqlParam::Json(json!({
            "busqueda": "acme",
            "activo": true,
            "limit": 5,
            "offset": 5
        }))]
    );
}

#[tokio::test]
async fn test_get_cliente_not_found() {
    let db = FakeDb::new();
    let app = setup_test_app(db.clone());

    let token = token_for("Equipo", &["clientes.leer"]);
    let (status, body) = send(app, "GET", "/api/clientes/99", Some(&token), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_code(&body), "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Cliente no encontrado");
    assert_eq!(db.params_of("cliente_get").unwrap(), vec![SqlParam::int(99)]);
}

#[tokio::test]
async fn test_invalid_path_id() {
    let db = FakeDb::new();
    let app = setup_test_app(db.clone());

    let token = token_for("Administrador", &[]);
    let (status, body) = send(app, "GET", "/api/clientes/abc", Some(&token), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn test_create_cliente_validation_envelope() {
    let db = FakeDb::new();
    let app = setup_test_app(db.clone());

    let token = token_for("Administrador", &[]);
    let (status, body) = send(
        app,
        "POST",
        "/api/clientes",
        Some(&token),
        Some(json!({"nombre": "", "correo": "no-es-correo"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("El correo no es válido"));
    assert!(message.contains("El nombre es obligatorio"));
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn test_create_cliente_conflict_from_database() {
    let db = FakeDb::new();
    db.respond(
        "cliente_post",
        json!({"estado": 409, "mensaje": "Ya existe un cliente con esa identificación"}),
    );
    let app = setup_test_app(db.clone());

    let token = token_for("Equipo", &["clientes.crear"]);
    let (status, body) = send(
        app,
        "POST",
        "/api/clientes",
        Some(&token),
        Some(json!({"nombre": "ACME", "identificacion": "123"})),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_code(&body), "CONFLICT");
    assert_eq!(
        body["error"]["message"],
        "Ya existe un cliente con esa identificación"
    );
    assert_eq!(
        db.params_of("cliente_post").unwrap(),
        vec![
            SqlParam::Json(json!({"nombre": "ACME", "identificacion": "123"})),
            SqlParam::int(TEST_USER_ID),
        ]
    );
}

#[tokio::test]
async fn test_update_and_delete_cliente() {
    let db = FakeDb::new();
    db.respond("cliente_put", json!({"status": 200, "data": {"id_cliente": 4, "activo": false}}));
    db.respond("cliente_delete", json!({"status": 200, "message": "Cliente eliminado", "data": {"id_cliente": 4}}));
    let app = setup_test_app(db.clone());

    let token = token_for("Equipo", &["clientes.editar", "clientes.eliminar"]);
    let (status, body) = send(
        app.clone(),
        "PUT",
        "/api/clientes/4",
        Some(&token),
        Some(json!({"activo": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["activo"], false);

    let (status, _) = send(app, "DELETE", "/api/clientes/4", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        db.params_of("cliente_delete").unwrap(),
        vec![SqlParam::int(4), SqlParam::int(TEST_USER_ID)]
    );
}

#[tokio::test]
async fn test_pagos_scoped_to_owner_for_equipo() {
    let db = FakeDb::new();
    db.respond("pago_get_all", json!([]));
    let app = setup_test_app(db.clone());

    let token = token_for("Equipo", &["pagos.leer"]);
    let (status, _) = send(app, "GET", "/api/pagos", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let params = db.params_of("pago_get_all").unwrap();
    assert_eq!(params[1], SqlParam::Int(Some(TEST_USER_ID)));
}

#[tokio::test]
async fn test_pagos_huge_page_saturates_offset() {
    let db = FakeDb::new();
    db.respond("pago_get_all", json!([]));
    let app = setup_test_app(db.clone());

    let token = token_for("Administrador", &[]);
    let (status, body) = send(
        app,
        "GET",
        "/api/pagos?page=9223372036854775807&limit=100",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let params = db.params_of("pago_get_all").unwrap();
    let SqlParam::Json(filters) = &params[0] else {
        panic!("expected a filter document, got {:?}", params[0]);
    };
    assert_eq!(filters["offset"], i64::MAX);
    assert_eq!(filters["limit"], 100);
}

#[tokio::test]
async fn test_pagos_unscoped_for_supervisor() {
    let db = FakeDb::new();
    db.respond("pago_get", json!({"id_pago": 3}));
    let app = setup_test_app(db.clone());

    let token = token_for("Supervisor", &["pagos.leer"]);
    let (status, body) = send(app, "GET", "/api/pagos/3", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id_pago"], 3);
    assert_eq!(
        db.params_of("pago_get").unwrap(),
        vec![SqlParam::int(3), SqlParam::Int(None)]
    );
}

#[tokio::test]
async fn test_pagos_rejects_inverted_date_range() {
    let db = FakeDb::new();
    let app = setup_test_app(db.clone());

    let token = token_for("Administrador", &[]);
    let (status, body) = send(
        app,
        "GET",
        "/api/pagos?desde=2025-03-01&hasta=2025-02-01",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn test_pago_requires_single_payment_method() {
    let db = FakeDb::new();
    let app = setup_test_app(db.clone());

    let token = token_for("Administrador", &[]);
    let (status, body) = send(
        app,
        "POST",
        "/api/pagos",
        Some(&token),
        Some(json!({
            "id_proveedor": 1,
            "id_tarjeta": 2,
            "id_cuenta_bancaria": 3,
            "monto": 10.0,
            "moneda": "CAD"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn test_verificar_pago() {
    let db = FakeDb::new();
    db.respond("pago_verificar", json!({"status": 200, "data": {"id_pago": 5, "verificado": true}}));
    let app = setup_test_app(db.clone());

    let token = token_for("Supervisor", &["pagos.verificar"]);
    let (status, body) = send(
        app,
        "PATCH",
        "/api/pagos/5/verificar",
        Some(&token),
        Some(json!({"verificado": true, "observacion": "Conciliado"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["verificado"], true);
    assert_eq!(
        db.params_of("pago_verificar").unwrap(),
        vec![
            SqlParam::int(5),
            SqlParam::bool(true),
            SqlParam::text("Conciliado"),
            SqlParam::int(TEST_USER_ID),
        ]
    );
}

#[tokio::test]
async fn test_tarjeta_cargo_rejects_zero_amount() {
    let db = FakeDb::new();
    let app = setup_test_app(db.clone());

    let token = token_for("Equipo", &["tarjetas.cargar"]);
    let (status, body) = send(
        app,
        "POST",
        "/api/tarjetas/3/cargo",
        Some(&token),
        Some(json!({"monto": 0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn test_tarjeta_cargo_insufficient_balance() {
    let db = FakeDb::new();
    db.respond(
        "tarjeta_realizar_cargo",
        json!({"status": 400, "message": "Saldo insuficiente"}),
    );
    let app = setup_test_app(db.clone());

    let token = token_for("Equipo", &["tarjetas.cargar"]);
    let (status, body) = send(
        app,
        "POST",
        "/api/tarjetas/3/cargo",
        Some(&token),
        Some(json!({"monto": 25.5, "descripcion": "Hotel"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Saldo insuficiente");
    assert_eq!(
        db.params_of("tarjeta_realizar_cargo").unwrap(),
        vec![
            SqlParam::int(3),
            SqlParam::numeric(25.5),
            SqlParam::text("Hotel"),
            SqlParam::int(TEST_USER_ID),
        ]
    );
}

#[tokio::test]
async fn test_tarjeta_recarga_needs_its_own_permission() {
    let db = FakeDb::new();
    let app = setup_test_app(db.clone());

    let token = token_for("Equipo", &["tarjetas.cargar"]);
    let (status, _) = send(
        app,
        "POST",
        "/api/tarjetas/3/recarga",
        Some(&token),
        Some(json!({"monto": 100})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_usuarios_restricted_to_administrador() {
    let db = FakeDb::new();
    let app = setup_test_app(db.clone());

    let token = token_for("Supervisor", &["usuarios.leer"]);
    let (status, body) = send(app, "GET", "/api/usuarios", Some(&token), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(error_code(&body), "FORBIDDEN");
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn test_usuarios_listing_hides_hashes() {
    let db = FakeDb::new();
    db.respond(
        "usuario_get_all",
        json!([{"id_usuario": 1, "nombre_usuario": "admin", "contrasena_hash": "$2b$12$abc"}]),
    );
    let app = setup_test_app(db.clone());

    let token = token_for("Administrador", &[]);
    let (status, body) = send(app, "GET", "/api/usuarios", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([{"id_usuario": 1, "nombre_usuario": "admin"}]));
}

#[tokio::test]
async fn test_create_usuario_sends_hash_only() {
    let db = FakeDb::new();
    db.respond("usuario_post", json!({"status": 201, "data": {"id_usuario": 20}}));
    let app = setup_test_app(db.clone());

    let token = token_for("Administrador", &[]);
    let (status, _) = send(
        app,
        "POST",
        "/api/usuarios",
        Some(&token),
        Some(json!({
            "nombre_usuario": "jperez",
            "correo": "jperez@terracanada.com",
            "nombre_completo": "Juan Pérez",
            "contrasena": "ClaveSegura1",
            "id_rol": 3
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let params = db.params_of("usuario_post").unwrap();
    let SqlParam::Json(payload) = &params[0] else {
        panic!("expected a jsonb payload");
    };
    assert!(payload.get("contrasena").is_none());
    assert!(payload["contrasena_hash"].as_str().unwrap().starts_with("$2"));
    assert_eq!(payload["activo"], true);
}

#[tokio::test]
async fn test_cannot_delete_own_user() {
    let db = FakeDb::new();
    let app = setup_test_app(db.clone());

    let token = token_for("Administrador", &[]);
    let uri = format!("/api/usuarios/{}", TEST_USER_ID);
    let (status, body) = send(app, "DELETE", &uri, Some(&token), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn test_roles_permission_assignment_is_admin_only() {
    let db = FakeDb::new();
    db.respond("rol_permisos_put", json!({"status": 200, "data": {"id_rol": 2}}));
    let app = setup_test_app(db.clone());

    let supervisor = token_for("Supervisor", &["roles.leer"]);
    let (status, _) = send(
        app.clone(),
        "PUT",
        "/api/roles/2/permisos",
        Some(&supervisor),
        Some(json!({"permisos": [1, 2]})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let admin = token_for("Administrador", &[]);
    let (status, _) = send(
        app,
        "PUT",
        "/api/roles/2/permisos",
        Some(&admin),
        Some(json!({"permisos": [1, 2]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        db.params_of("rol_permisos_put").unwrap(),
        vec![
            SqlParam::int(2),
            SqlParam::Json(json!([1, 2])),
            SqlParam::int(TEST_USER_ID),
        ]
    );
}

#[tokio::test]
async fn test_dashboard_scope_and_period() {
    let db = FakeDb::new();
    db.respond("dashboard_get_pagos", json!([]));
    let app = setup_test_app(db.clone());

    let token = token_for("Equipo", &["dashboard.leer"]);
    let (status, _) = send(
        app,
        "GET",
        "/api/dashboard/pagos?desde=2025-01-01&hasta=2025-01-31",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let params = db.params_of("dashboard_get_pagos").unwrap();
    assert_eq!(params[2], SqlParam::Int(Some(TEST_USER_ID)));
    assert!(matches!(params[0], SqlParam::Date(Some(_))));
}

#[tokio::test]
async fn test_database_failure_hides_details() {
    let db = FakeDb::new();
    db.respond("proveedor_get_all", json!({"status": 500, "message": "relation does not exist"}));
    let app = setup_test_app(db.clone());

    let token = token_for("Administrador", &[]);
    let (status, body) = send(app, "GET", "/api/proveedores", Some(&token), None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_code(&body), "INTERNAL_ERROR");
    assert!(
        !body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("relation")
    );
}

#[tokio::test]
async fn test_proveedores_crud() {
    let db = FakeDb::new();
    db.respond("proveedor_get_all", json!([{"id_proveedor": 1, "nombre": "Hotel Laurier"}]));
    db.respond("proveedor_post", json!({"status": 201, "data": {"id_proveedor": 2}}));
    db.respond("proveedor_put", json!({"id_proveedor": 2, "activo": false}));
    db.respond("proveedor_delete", json!({"id_proveedor": 2}));
    let app = setup_test_app(db.clone());

    let token = token_for(
        "Equipo",
        &[
            "proveedores.leer",
            "proveedores.crear",
            "proveedores.editar",
            "proveedores.eliminar",
        ],
    );

    let (status, body) = send(
        app.clone(),
        "GET",
        "/api/proveedores?servicio=hotel&limit=10",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["nombre"], "Hotel Laurier");
    assert_eq!(
        db.params_of("proveedor_get_all").unwrap(),
        vec![SqlParam::Json(json!({
            "busqueda": null,
            "servicio": "hotel",
            "activo": null,
            "limit": 10,
            "offset": 0
        }))]
    );

    let (status, body) = send(
        app.clone(),
        "POST",
        "/api/proveedores",
        Some(&token),
        Some(json!({"nombre": "Hotel Laurier", "servicio": "hotel"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id_proveedor"], 2);
    assert_eq!(
        db.params_of("proveedor_post").unwrap(),
        vec![
            SqlParam::Json(json!({"nombre": "Hotel Laurier", "servicio": "hotel"})),
            SqlParam::int(TEST_USER_ID)
        ]
    );

    let (status, _) = send(
        app.clone(),
        "PUT",
        "/api/proveedores/2",
        Some(&token),
        Some(json!({"activo": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        db.params_of("proveedor_put").unwrap(),
        vec![
            SqlParam::int(2),
            SqlParam::Json(json!({"activo": false})),
            SqlParam::int(TEST_USER_ID)
        ]
    );

    let (status, _) = send(app, "DELETE", "/api/proveedores/2", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        db.params_of("proveedor_delete").unwrap(),
        vec![SqlParam::int(2), SqlParam::int(TEST_USER_ID)]
    );
}

#[tokio::test]
async fn test_get_proveedor_not_found() {
    let db = FakeDb::new();
    let app = setup_test_app(db.clone());

    let token = token_for("Equipo", &["proveedores.leer"]);
    let (status, body) = send(app, "GET", "/api/proveedores/99", Some(&token), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Proveedor no encontrado");
}

#[tokio::test]
async fn test_proveedores_gates_per_method() {
    let db = FakeDb::new();
    let app = setup_test_app(db.clone());

    let token = token_for("Equipo", &["proveedores.leer"]);
    let body = json!({"nombre": "Hotel Laurier"});
    let cases = [
        ("POST", "/api/proveedores", Some(body.clone())),
        ("PUT", "/api/proveedores/2", Some(body)),
        ("DELETE", "/api/proveedores/2", None),
    ];

    for (method, uri, payload) in cases {
        let (status, body) = send(app.clone(), method, uri, Some(&token), payload).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{method} {uri}");
        assert_eq!(error_code(&body), "FORBIDDEN");
    }
    assert!(db.calls().is_empty());
}

fn cuenta_body() -> serde_json::Value {
    json!({
        "banco": "RBC",
        "numero_cuenta": "0012-3456-78",
        "titular": "Terra Canada Inc.",
        "moneda": "CAD"
    })
}

#[tokio::test]
async fn test_list_cuentas_bancarias_forwards_filters() {
    let db = FakeDb::new();
    db.respond("cuenta_bancaria_get_all", json!([{"id_cuenta_bancaria": 1, "banco": "RBC"}]));
    let app = setup_test_app(db.clone());

    let token = token_for("Equipo", &["cuentas.leer"]);
    let (status, body) = send(
        app,
        "GET",
        "/api/cuentas-bancarias?moneda=CAD&activo=true&limit=5&page=3",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["banco"], "RBC");
    assert_eq!(
        db.params_of("cuenta_bancaria_get_all").unwrap(),
        vec![SqlParam::Json(json!({
            "banco": null,
            "moneda": "CAD",
            "activo": true,
            "limit": 5,
            "offset": 10
        }))]
    );
}

#[tokio::test]
async fn test_get_cuenta_bancaria() {
    let db = FakeDb::new();
    db.respond("cuenta_bancaria_get", json!({"id_cuenta_bancaria": 4, "banco": "TD"}));
    let app = setup_test_app(db.clone());

    let token = token_for("Supervisor", &["cuentas.leer"]);
    let (status, body) = send(app, "GET", "/api/cuentas-bancarias/4", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["banco"], "TD");
    assert_eq!(db.params_of("cuenta_bancaria_get").unwrap(), vec![SqlParam::int(4)]);

    let db = FakeDb::new();
    let app = setup_test_app(db.clone());
    let (status, body) = send(app, "GET", "/api/cuentas-bancarias/5", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Cuenta bancaria no encontrada");
}

#[tokio::test]
async fn test_create_cuenta_bancaria() {
    let db = FakeDb::new();
    db.respond(
        "cuenta_bancaria_post",
        json!({"estado": 201, "mensaje": "Cuenta creada", "datos": {"id_cuenta_bancaria": 6}}),
    );
    let app = setup_test_app(db.clone());

    let token = token_for("Equipo", &["cuentas.crear"]);
    let (status, body) = send(
        app,
        "POST",
        "/api/cuentas-bancarias",
        Some(&token),
        Some(cuenta_body()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id_cuenta_bancaria"], 6);
    assert_eq!(
        db.params_of("cuenta_bancaria_post").unwrap(),
        vec![SqlParam::Json(cuenta_body()), SqlParam::int(TEST_USER_ID)]
    );
}

#[tokio::test]
async fn test_create_cuenta_bancaria_rejects_currency() {
    let db = FakeDb::new();
    let app = setup_test_app(db.clone());

    let mut payload = cuenta_body();
    payload["moneda"] = json!("cad");

    let token = token_for("Administrador", &[]);
    let (status, body) = send(app, "POST", "/api/cuentas-bancarias", Some(&token), Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn test_update_and_delete_cuenta_bancaria() {
    let db = FakeDb::new();
    db.respond("cuenta_bancaria_put", json!({"id_cuenta_bancaria": 6, "activo": false}));
    db.respond("cuenta_bancaria_delete", json!({"id_cuenta_bancaria": 6}));
    let app = setup_test_app(db.clone());

    let token = token_for("Equipo", &["cuentas.editar", "cuentas.eliminar"]);
    let (status, body) = send(
        app.clone(),
        "PUT",
        "/api/cuentas-bancarias/6",
        Some(&token),
        Some(json!({"titular": "Terra Canada Ltd.", "activo": false})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["activo"], false);
    assert_eq!(
        db.params_of("cuenta_bancaria_put").unwrap(),
        vec![
            SqlParam::int(6),
            SqlParam::Json(json!({"titular": "Terra Canada Ltd.", "activo": false})),
            SqlParam::int(TEST_USER_ID)
        ]
    );

    let (status, _) = send(app, "DELETE", "/api/cuentas-bancarias/6", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        db.params_of("cuenta_bancaria_delete").unwrap(),
        vec![SqlParam::int(6), SqlParam::int(TEST_USER_ID)]
    );
}

#[tokio::test]
async fn test_cuentas_bancarias_gates_per_method() {
    let db = FakeDb::new();
    let app = setup_test_app(db.clone());

    let lector = token_for("Equipo", &["cuentas.leer"]);
    let sin_permisos = token_for("Equipo", &["pagos.leer"]);
    let cases = [
        ("GET", "/api/cuentas-bancarias", &sin_permisos, None),
        ("GET", "/api/cuentas-bancarias/6", &sin_permisos, None),
        ("POST", "/api/cuentas-bancarias", &lector, Some(cuenta_body())),
        ("PUT", "/api/cuentas-bancarias/6", &lector, Some(json!({"activo": false}))),
        ("DELETE", "/api/cuentas-bancarias/6", &lector, None),
    ];

    for (method, uri, token, payload) in cases {
        let (status, body) = send(app.clone(), method, uri, Some(token.as_str()), payload).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{method} {uri}");
        assert_eq!(error_code(&body), "FORBIDDEN");
    }
    assert!(db.calls().is_empty());
}
