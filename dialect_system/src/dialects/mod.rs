//! Built-in dialect implementations
//!
//! One implementation per family of native pagination syntax:
//!
//! | Dialect       | Syntax                          | Engines                                   |
//! |---------------|---------------------------------|-------------------------------------------|
//! | `Informix`    | `SKIP ? FIRST ?` subquery        | Informix                                  |
//! | `MySql`       | `LIMIT ?, ?`                    | MySQL, MariaDB                            |
//! | `LimitOffset` | `LIMIT ? OFFSET ?`              | PostgreSQL, SQLite, H2, HSQLDB            |
//! | `Oracle`      | `ROWNUM` range                  | Oracle before 12c                         |
//! | `OffsetFetch` | `OFFSET ? ROWS FETCH NEXT ?`    | Oracle 12c, SQL Server 2012, Derby        |
//! | `Db2`         | `ROWNUMBER() OVER()` range      | DB2                                       |
//! | `SqlServer`   | `TOP (?)` with `ROW_NUMBER()`   | SQL Server before 2012                    |

mod db2;
mod informix;
mod limit_offset;
mod mysql;
mod offset_fetch;
mod oracle;
mod sql_server;

pub use db2::Db2;
pub use informix::Informix;
pub use limit_offset::LimitOffset;
pub use mysql::MySql;
pub use offset_fetch::OffsetFetch;
pub use oracle::Oracle;
pub use sql_server::SqlServer;
