//! Permission constants for the Terra Canada API.
//!
//! Permission names are granted to roles in the database and embedded in the
//! access token at login. Route gates compare against these constants, so a
//! renamed permission only has to change here.
//!
//! # Example
//!
//! ```ignore
//! use terra_core::permissions;
//!
//! .route("/", post(create_pago).route_layer(require_permission(permissions::PAGOS_CREAR)))
//! ```

// =============================================================================
// Clientes
// =============================================================================

pub const CLIENTES_LEER: &str = "clientes.leer";
pub const CLIENTES_CREAR: &str = "clientes.crear";
pub const CLIENTES_EDITAR: &str = "clientes.editar";
pub const CLIENTES_ELIMINAR: &str = "clientes.eliminar";

// =============================================================================
// Proveedores
// =============================================================================

pub const PROVEEDORES_LEER: &str = "proveedores.leer";
pub const PROVEEDORES_CREAR: &str = "proveedores.crear";
pub const PROVEEDORES_EDITAR: &str = "proveedores.editar";
pub const PROVEEDORES_ELIMINAR: &str = "proveedores.eliminar";

// =============================================================================
// Tarjetas
// =============================================================================

pub const TARJETAS_LEER: &str = "tarjetas.leer";
pub const TARJETAS_CREAR: &str = "tarjetas.crear";
pub const TARJETAS_EDITAR: &str = "tarjetas.editar";
pub const TARJETAS_ELIMINAR: &str = "tarjetas.eliminar";
/// Charge an amount against a card balance
pub const TARJETAS_CARGAR: &str = "tarjetas.cargar";
/// Top up a card balance
pub const TARJETAS_RECARGAR: &str = "tarjetas.recargar";

// =============================================================================
// Cuentas bancarias
// =============================================================================

pub const CUENTAS_LEER: &str = "cuentas.leer";
pub const CUENTAS_CREAR: &str = "cuentas.crear";
pub const CUENTAS_EDITAR: &str = "cuentas.editar";
pub const CUENTAS_ELIMINAR: &str = "cuentas.eliminar";

// =============================================================================
// Pagos
// =============================================================================

pub const PAGOS_LEER: &str = "pagos.leer";
pub const PAGOS_CREAR: &str = "pagos.crear";
pub const PAGOS_EDITAR: &str = "pagos.editar";
pub const PAGOS_ELIMINAR: &str = "pagos.eliminar";
pub const PAGOS_VERIFICAR: &str = "pagos.verificar";

// =============================================================================
// Roles, dashboard, notificaciones
// =============================================================================

pub const ROLES_LEER: &str = "roles.leer";
pub const DASHBOARD_LEER: &str = "dashboard.leer";
pub const NOTIFICACIONES_ENVIAR: &str = "notificaciones.enviar";
