mod bars;
mod task_list;
pub(super) mod util;
