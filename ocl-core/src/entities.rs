pub use ocl_entities::{
    address::*, area::*, crawl::*, geo::*, id::*, participant::*, password::*, time::*, venue::*,
};
