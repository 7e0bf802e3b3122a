//! Common CDL sources for tests.

/// A small document exercising every construct. Produces no diagnostics.
///
/// Lines: 0 comment, 1-2 bindings, 3 references + twin, 4 nested growth,
/// 5 aggregate, 6 amorphous.
pub const SAMPLE_DOC: &str = "\
# Quartz and friends
@prism = {10-10}@1.0
@rhomb = {10-11}@0.8
trigonal[-3m]:$prism + $rhomb | twin(japan)
cubic[m3m]:{111}@1.0 + {100}@0.3 > {110}@0.5
cubic[m3m]:{111} ~ parallel[20] [aligned]
amorphous[opalescent]:{botryoidal, massive}
";

pub const DUPLICATE_BINDINGS: &str = "\
@a = {111}
@a = {100}
cubic[m3m]:$a
";

/// One problem per line, each caught by a different checker.
pub const BROKEN_DOC: &str = "\
cubic[6/mmm]:{111}
dodecagonal[m]:{111}
amorphous[crystalline]:{massive}
amorphous[glassy]:{massive, lumpy}
cubic[m3m]:{111} ~ scattered[5]
cubic[m3m]:{111} ~ parallel[500]
cubic[m3m]:{111} ~ parallel[20] [sideways]
cubic[m3m]:{111} | twin(martian)
cubic[m3m]:{111} | squash(a)
cubic[m3m]:$nowhere
";
