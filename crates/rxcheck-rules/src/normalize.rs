use crate::DrugPair;

/// 归一化药物组合：去除首尾空白、转小写，再按字母序排列
pub fn normalize_pair(a: &str, b: &str) -> DrugPair {
    let a = normalize_name(a);
    let b = normalize_name(b);
    if a <= b {
        DrugPair::new_unchecked(a, b)
    } else {
        DrugPair::new_unchecked(b, a)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
