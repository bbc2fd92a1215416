//! Tuned crossover points between the sort strategies
//! 各排序策略之间调优过的切换点

/// Max number of runs before merge sort is abandoned
/// 放弃归并排序前的最大游程数
pub const MAX_RUN_COUNT: usize = 67;

/// Max length of a run of equal elements
/// 相等元素游程的最大长度
pub const MAX_RUN_LENGTH: usize = 33;

/// Ranges with `right - left` below this go straight to quicksort
/// `right - left` 小于此值的范围直接使用快速排序
pub const QUICKSORT_THRESHOLD: usize = 286;

/// Ranges shorter than this use insertion sort
/// 长度小于此值的范围使用插入排序
pub const INSERTION_SORT_THRESHOLD: usize = 47;
