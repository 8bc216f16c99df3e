//! 주기 경계를 감싸는 선형 보간

/// `xp`/`fp` 로 주어진 불규칙 곡선을 `query` 위치에서 선형 보간한다.
///
/// x 값은 `period` 로 감싸서 정렬하고, 마지막 점과 첫 점 사이는 경계를 넘어 이어진다.
/// 점이 없으면 0, 하나면 상수를 돌려준다.
pub fn interp_periodic(query: &[f64], xp: &[f64], fp: &[f64], period: f64) -> Vec<f64> {
    let mut points: Vec<(f64, f64)> = xp
        .iter()
        .zip(fp)
        .map(|(&x, &f)| (x.rem_euclid(period), f))
        .collect();

    match points.len() {
        0 => return vec![0.0; query.len()],
        1 => return vec![points[0].1; query.len()],
        _ => {}
    }

    points.sort_by(|a, b| a.0.total_cmp(&b.0));

    let (first, last) = (points[0], points[points.len() - 1]);
    let mut xs = Vec::with_capacity(points.len() + 2);
    let mut fs = Vec::with_capacity(points.len() + 2);
    xs.push(last.0 - period);
    fs.push(last.1);
    for &(x, f) in &points {
        xs.push(x);
        fs.push(f);
    }
    xs.push(first.0 + period);
    fs.push(first.1);

    query
        .iter()
        .map(|&q| {
            let q = q.rem_euclid(period);
            // xs[0] < 0 <= q < period <= xs[last] 이므로 hi 는 항상 [1, len-1]
            let hi = xs.partition_point(|&x| x <= q).clamp(1, xs.len() - 1);
            let lo = hi - 1;
            let dx = xs[hi] - xs[lo];
            if dx <= 0.0 {
                fs[lo]
            } else {
                fs[lo] + (fs[hi] - fs[lo]) * (q - xs[lo]) / dx
            }
        })
        .collect()
}
