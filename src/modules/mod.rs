pub mod auth;
pub mod clientes;
pub mod cuentas_bancarias;
pub mod dashboard;
pub mod eventos;
pub mod notificaciones;
pub mod pagos;
pub mod proveedores;
pub mod roles;
pub mod tarjetas;
pub mod usuarios;
