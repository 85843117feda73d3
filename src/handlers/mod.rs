pub mod adrs;
pub mod aplicacoes;
pub mod catalogos;
pub mod colaboradores;
pub mod relatorios;
pub mod slas;
pub mod tecnologias;
pub mod vinculos;
