//! # Digitized Outlines
//!
//! Fixed point tables traced from photographs of real frame lenses. Each
//! table holds exactly [`DIGITIZED_POINTS`] `[x, z]` pairs in rim order.
//! The stored data is only approximately normalized; the catalog runs it
//! through the shared normalize step before handing it out.

use glam::DVec2;

/// Number of points in every digitized table.
pub const DIGITIZED_POINTS: usize = 120;

/// Converts a table into outline points.
pub fn to_points(table: &[[f64; 2]]) -> Vec<DVec2> {
    table.iter().map(|&[x, z]| DVec2::new(x, z)).collect()
}

/// Smoothed trace of a real frame lens.
#[rustfmt::skip]
pub static DIGITIZED_1: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.47300, -0.00558], [0.46581, 0.02068], [0.45850, 0.04574], [0.45154, 0.06934],
    [0.44490, 0.09188], [0.43795, 0.11416], [0.42999, 0.13675], [0.42082, 0.15966],
    [0.41069, 0.18243], [0.39978, 0.20457], [0.38763, 0.22579], [0.37322, 0.24578],
    [0.35556, 0.26369], [0.33450, 0.27838], [0.31083, 0.28926], [0.28584, 0.29675],
    [0.26068, 0.30188], [0.23611, 0.30555], [0.21248, 0.30824], [0.18983, 0.31021],
    [0.16796, 0.31183], [0.14646, 0.31347], [0.12490, 0.31526], [0.10293, 0.31703],
    [0.08045, 0.31850], [0.05759, 0.31954], [0.03456, 0.32026], [0.01149, 0.32097],
    [-0.01155, 0.32188], [-0.03430, 0.32292], [-0.05633, 0.32377], [-0.07725, 0.32408],
    [-0.09695, 0.32370], [-0.11584, 0.32272], [-0.13490, 0.32144], [-0.15518, 0.32017],
    [-0.17715, 0.31899], [-0.20052, 0.31775], [-0.22471, 0.31637], [-0.24934, 0.31490],
    [-0.27425, 0.31337], [-0.29937, 0.31163], [-0.32468, 0.30943], [-0.35010, 0.30651],
    [-0.37556, 0.30264], [-0.40073, 0.29730], [-0.42463, 0.28931], [-0.44547, 0.27707],
    [-0.46166, 0.25976], [-0.47289, 0.23809], [-0.48021, 0.21385], [-0.48512, 0.18883],
    [-0.48876, 0.16416], [-0.49166, 0.14029], [-0.49400, 0.11725], [-0.49592, 0.09480],
    [-0.49749, 0.07253], [-0.49864, 0.04988], [-0.49934, 0.02626], [-0.49969, 0.00118],
    [-0.49987, -0.02541], [-0.49994, -0.05293], [-0.49989, -0.08037], [-0.49969, -0.10682],
    [-0.49931, -0.13207], [-0.49862, -0.15655], [-0.49726, -0.18081], [-0.49441, -0.20497],
    [-0.48874, -0.22841], [-0.47877, -0.24976], [-0.46364, -0.26740], [-0.44366, -0.28045],
    [-0.42015, -0.28927], [-0.39467, -0.29513], [-0.36844, -0.29934], [-0.34220, -0.30267],
    [-0.31636, -0.30533], [-0.29119, -0.30743], [-0.26697, -0.30912], [-0.24390, -0.31057],
    [-0.22196, -0.31190], [-0.20107, -0.31325], [-0.18130, -0.31475], [-0.16257, -0.31634],
    [-0.14416, -0.31791], [-0.12512, -0.31946], [-0.10504, -0.32099], [-0.08408, -0.32235],
    [-0.06240, -0.32324], [-0.04011, -0.32347], [-0.01762, -0.32320], [0.00438, -0.32280],
    [0.02529, -0.32264], [0.04485, -0.32279], [0.06339, -0.32309], [0.08182, -0.32316],
    [0.10130, -0.32268], [0.12251, -0.32156], [0.14537, -0.32000], [0.16942, -0.31826],
    [0.19445, -0.31640], [0.22049, -0.31439], [0.24748, -0.31224], [0.27497, -0.30981],
    [0.30250, -0.30690], [0.32997, -0.30346], [0.35758, -0.29953], [0.38521, -0.29469],
    [0.41199, -0.28766], [0.43640, -0.27678], [0.45689, -0.26096], [0.47264, -0.24029],
    [0.48378, -0.21595], [0.49083, -0.18958], [0.49432, -0.16260], [0.49481, -0.13595],
    [0.49304, -0.10994], [0.48971, -0.08429], [0.48517, -0.05851], [0.47956, -0.03221],
];

/// Unsmoothed trace of the same lens as [`DIGITIZED_1`].
#[rustfmt::skip]
pub static DIGITIZED_1_RAW: [[f64; 2]; DIGITIZED_POINTS] = [
    [-0.47382, -0.00524], [-0.46755, 0.02300], [-0.45658, 0.04865], [-0.44964, 0.07130],
    [-0.44515, 0.09175], [-0.44098, 0.11280], [-0.43194, 0.13558], [-0.42147, 0.16017],
    [-0.41175, 0.18322], [-0.39939, 0.20737], [-0.39005, 0.22512], [-0.37958, 0.24757],
    [-0.36063, 0.26789], [-0.33887, 0.28694], [-0.31070, 0.29246], [-0.28714, 0.30002],
    [-0.25832, 0.30243], [-0.23495, 0.30677], [-0.21164, 0.30890], [-0.18829, 0.31273],
    [-0.16628, 0.30935], [-0.14921, 0.31327], [-0.12304, 0.31602], [-0.10512, 0.31684],
    [-0.08170, 0.31937], [-0.05649, 0.32089], [-0.03408, 0.31938], [-0.01309, 0.32142],
    [0.01215, 0.31956], [0.03582, 0.32461], [0.05733, 0.32461], [0.07885, 0.32461],
    [0.10037, 0.32461], [0.11448, 0.32461], [0.13374, 0.31960], [0.15096, 0.31981],
    [0.17405, 0.31937], [0.20297, 0.31937], [0.22238, 0.31427], [0.24894, 0.31702],
    [0.27487, 0.31130], [0.29922, 0.31414], [0.32291, 0.30890], [0.35183, 0.30890],
    [0.37552, 0.30366], [0.39918, 0.29804], [0.42796, 0.29516], [0.45525, 0.28812],
    [0.46951, 0.26609], [0.47665, 0.23913], [0.48429, 0.21559], [0.48429, 0.18667],
    [0.48953, 0.16298], [0.49333, 0.13944], [0.49476, 0.11613], [0.49439, 0.09424],
    [0.49935, 0.07330], [0.49965, 0.05095], [0.49914, 0.02797], [0.50000, 0.00482],
    [0.50000, -0.02410], [0.50000, -0.05302], [0.50000, -0.08194], [0.50000, -0.11087],
    [0.50000, -0.13238], [0.49776, -0.15483], [0.50000, -0.18282], [0.49619, -0.20276],
    [0.49476, -0.23109], [0.48742, -0.25452], [0.47146, -0.27664], [0.44764, -0.28580],
    [0.42153, -0.29319], [0.39529, -0.29588], [0.36898, -0.30018], [0.34012, -0.30211],
    [0.31649, -0.30885], [0.29058, -0.30616], [0.26440, -0.30890], [0.24151, -0.31219],
    [0.22251, -0.31137], [0.20002, -0.31258], [0.17786, -0.31414], [0.16109, -0.31746],
    [0.14598, -0.31775], [0.13055, -0.31937], [0.10209, -0.31984], [0.08535, -0.32461],
    [0.06430, -0.32347], [0.04231, -0.32461], [0.01339, -0.32461], [-0.00281, -0.31956],
    [-0.02964, -0.32461], [-0.04551, -0.32038], [-0.06527, -0.32461], [-0.07990, -0.32336],
    [-0.09665, -0.32440], [-0.11987, -0.32251], [-0.14636, -0.31937], [-0.16701, -0.31728],
    [-0.19416, -0.31894], [-0.21778, -0.31320], [-0.24667, -0.31195], [-0.27557, -0.31069],
    [-0.30446, -0.30943], [-0.32807, -0.30247], [-0.35684, -0.29945], [-0.38560, -0.29642],
    [-0.41436, -0.29339], [-0.44189, -0.28464], [-0.46593, -0.26901], [-0.47766, -0.24444],
    [-0.48831, -0.21819], [-0.49481, -0.19001], [-0.50000, -0.16168], [-0.49680, -0.13337],
    [-0.49426, -0.11112], [-0.49067, -0.08242], [-0.48766, -0.06123], [-0.48005, -0.03332],
];

/// Lightly smoothed trace that keeps the corners of [`DIGITIZED_1`].
#[rustfmt::skip]
pub static DIGITIZED_1_SHARP: [[f64; 2]; DIGITIZED_POINTS] = [
    [-0.47382, -0.00524], [-0.46829, 0.01873], [-0.46276, 0.04269], [-0.45661, 0.06645],
    [-0.44715, 0.08915], [-0.43769, 0.11184], [-0.43194, 0.13528], [-0.42398, 0.15808],
    [-0.41340, 0.18028], [-0.40283, 0.20248], [-0.39226, 0.22468], [-0.38169, 0.24688],
    [-0.36476, 0.26428], [-0.34626, 0.28047], [-0.32516, 0.29214], [-0.30159, 0.29843],
    [-0.27700, 0.29843], [-0.25356, 0.30553], [-0.22958, 0.31029], [-0.20512, 0.31273],
    [-0.18059, 0.31414], [-0.15600, 0.31414], [-0.13141, 0.31414], [-0.10899, 0.31937],
    [-0.08440, 0.31937], [-0.06146, 0.32336], [-0.03739, 0.32461], [-0.01280, 0.32461],
    [0.01179, 0.32461], [0.03639, 0.32461], [0.06098, 0.32461], [0.08557, 0.32461],
    [0.11016, 0.32461], [0.13475, 0.32461], [0.15934, 0.32461], [0.18176, 0.31913],
    [0.20633, 0.31818], [0.23090, 0.31724], [0.25547, 0.31629], [0.28005, 0.31535],
    [0.30462, 0.31440], [0.32704, 0.30890], [0.35163, 0.30890], [0.37591, 0.30515],
    [0.40016, 0.30111], [0.42442, 0.29706], [0.44851, 0.29261], [0.46549, 0.27631],
    [0.47326, 0.25298], [0.48104, 0.22965], [0.48587, 0.20568], [0.48859, 0.18124],
    [0.49130, 0.15680], [0.49402, 0.13236], [0.49674, 0.10792], [0.49945, 0.08347],
    [0.50000, 0.05891], [0.50000, 0.03432], [0.50000, 0.00973], [0.50000, -0.01486],
    [0.50000, -0.03945], [0.50000, -0.06404], [0.50000, -0.08863], [0.50000, -0.11322],
    [0.50000, -0.13781], [0.50000, -0.16240], [0.50000, -0.18699], [0.49861, -0.21151],
    [0.49589, -0.23595], [0.48832, -0.25896], [0.47183, -0.27636], [0.44972, -0.28587],
    [0.42576, -0.29140], [0.40180, -0.29693], [0.37742, -0.29971], [0.35289, -0.30146],
    [0.32836, -0.30321], [0.30597, -0.30944], [0.28141, -0.31067], [0.25685, -0.31190],
    [0.23229, -0.31312], [0.20773, -0.31435], [0.18317, -0.31558], [0.15861, -0.31681],
    [0.13405, -0.31804], [0.10949, -0.31926], [0.08707, -0.32461], [0.06248, -0.32461],
    [0.03789, -0.32461], [0.01330, -0.32461], [-0.01129, -0.32461], [-0.03588, -0.32461],
    [-0.06047, -0.32461], [-0.08506, -0.32461], [-0.10965, -0.32461], [-0.13250, -0.32038],
    [-0.15663, -0.31805], [-0.18118, -0.31665], [-0.20573, -0.31524], [-0.23028, -0.31384],
    [-0.25483, -0.31244], [-0.27938, -0.31104], [-0.30393, -0.30963], [-0.32827, -0.30660],
    [-0.35239, -0.30177], [-0.37650, -0.29695], [-0.40061, -0.29213], [-0.42473, -0.28731],
    [-0.44862, -0.28199], [-0.46829, -0.26724], [-0.47942, -0.24535], [-0.48737, -0.22226],
    [-0.49290, -0.19830], [-0.49843, -0.17434], [-0.49816, -0.15002], [-0.49558, -0.12557],
    [-0.49301, -0.10111], [-0.49043, -0.07666], [-0.48495, -0.05278], [-0.47788, -0.02923],
];

/// Trace of a second frame lens.
#[rustfmt::skip]
pub static DIGITIZED_2: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.49467, 0.00246], [0.49287, 0.02813], [0.48996, 0.05358], [0.48599, 0.07889],
    [0.48076, 0.10427], [0.47411, 0.12975], [0.46594, 0.15508], [0.45592, 0.17983],
    [0.44340, 0.20333], [0.42769, 0.22464], [0.40870, 0.24283], [0.38700, 0.25758],
    [0.36347, 0.26933], [0.33891, 0.27881], [0.31395, 0.28656], [0.28915, 0.29285],
    [0.26510, 0.29788], [0.24216, 0.30187], [0.22022, 0.30503], [0.19882, 0.30757],
    [0.17763, 0.30971], [0.15677, 0.31170], [0.13654, 0.31367], [0.11700, 0.31557],
    [0.09805, 0.31732], [0.07991, 0.31902], [0.06303, 0.32075], [0.04721, 0.32234],
    [0.03105, 0.32351], [0.01284, 0.32405], [-0.00790, 0.32395], [-0.03006, 0.32340],
    [-0.05226, 0.32274], [-0.07392, 0.32224], [-0.09507, 0.32179], [-0.11572, 0.32104],
    [-0.13595, 0.31998], [-0.15609, 0.31888], [-0.17658, 0.31793], [-0.19781, 0.31698],
    [-0.22004, 0.31587], [-0.24336, 0.31440], [-0.26753, 0.31230], [-0.29215, 0.30932],
    [-0.31703, 0.30551], [-0.34212, 0.30090], [-0.36706, 0.29506], [-0.39106, 0.28701],
    [-0.41322, 0.27574], [-0.43275, 0.26074], [-0.44909, 0.24220], [-0.46200, 0.22071],
    [-0.47189, 0.19695], [-0.47955, 0.17166], [-0.48559, 0.14564], [-0.49024, 0.11960],
    [-0.49367, 0.09387], [-0.49601, 0.06823], [-0.49736, 0.04219], [-0.49779, 0.01535],
    [-0.49746, -0.01222], [-0.49646, -0.04011], [-0.49461, -0.06781], [-0.49157, -0.09503],
    [-0.48711, -0.12173], [-0.48103, -0.14793], [-0.47292, -0.17335], [-0.46197, -0.19735],
    [-0.44736, -0.21905], [-0.42887, -0.23766], [-0.40717, -0.25276], [-0.38355, -0.26454],
    [-0.35911, -0.27366], [-0.33442, -0.28098], [-0.30973, -0.28717], [-0.28545, -0.29255],
    [-0.26188, -0.29709], [-0.23896, -0.30076], [-0.21660, -0.30377], [-0.19496, -0.30643],
    [-0.17437, -0.30892], [-0.15496, -0.31124], [-0.13652, -0.31324], [-0.11873, -0.31485],
    [-0.10140, -0.31624], [-0.08457, -0.31782], [-0.06825, -0.31968], [-0.05203, -0.32145],
    [-0.03494, -0.32254], [-0.01626, -0.32265], [0.00365, -0.32205], [0.02364, -0.32142],
    [0.04280, -0.32116], [0.06103, -0.32096], [0.07899, -0.32029], [0.09755, -0.31911],
    [0.11725, -0.31780], [0.13800, -0.31664], [0.15941, -0.31545], [0.18118, -0.31389],
    [0.20326, -0.31164], [0.22558, -0.30852], [0.24810, -0.30458], [0.27092, -0.29993],
    [0.29425, -0.29465], [0.31816, -0.28874], [0.34250, -0.28208], [0.36688, -0.27428],
    [0.39056, -0.26469], [0.41268, -0.25258], [0.43255, -0.23741], [0.44977, -0.21904],
    [0.46397, -0.19785], [0.47480, -0.17452], [0.48223, -0.14983], [0.48690, -0.12449],
    [0.48995, -0.09906], [0.49233, -0.07382], [0.49420, -0.04861], [0.49512, -0.02320],
];

/// Trace of a third frame lens.
#[rustfmt::skip]
pub static DIGITIZED_3: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.46884, -0.01656], [0.46290, 0.00653], [0.45621, 0.03022], [0.44905, 0.05424],
    [0.44171, 0.07804], [0.43429, 0.10121], [0.42659, 0.12387], [0.41815, 0.14645],
    [0.40839, 0.16937], [0.39673, 0.19263], [0.38269, 0.21554], [0.36600, 0.23683],
    [0.34669, 0.25532], [0.32516, 0.27048], [0.30210, 0.28240], [0.27820, 0.29144],
    [0.25398, 0.29802], [0.22986, 0.30272], [0.20618, 0.30621], [0.18313, 0.30894],
    [0.16071, 0.31098], [0.13902, 0.31238], [0.11819, 0.31350], [0.09802, 0.31480],
    [0.07802, 0.31634], [0.05788, 0.31790], [0.03753, 0.31937], [0.01659, 0.32077],
    [-0.00570, 0.32210], [-0.02965, 0.32323], [-0.05471, 0.32397], [-0.07990, 0.32415],
    [-0.10438, 0.32367], [-0.12770, 0.32258], [-0.14999, 0.32116], [-0.17185, 0.31976],
    [-0.19394, 0.31844], [-0.21657, 0.31699], [-0.23987, 0.31511], [-0.26391, 0.31264],
    [-0.28882, 0.30943], [-0.31453, 0.30531], [-0.34069, 0.29998], [-0.36666, 0.29290],
    [-0.39154, 0.28322], [-0.41423, 0.27002], [-0.43367, 0.25266], [-0.44915, 0.23135],
    [-0.46063, 0.20713], [-0.46872, 0.18148], [-0.47438, 0.15556], [-0.47845, 0.12993],
    [-0.48155, 0.10471], [-0.48413, 0.07980], [-0.48649, 0.05489], [-0.48877, 0.02957],
    [-0.49094, -0.00369], [-0.49283, -0.02240], [-0.49439, -0.04802], [-0.49579, -0.07289],
    [-0.49707, -0.09739], [-0.49796, -0.12227], [-0.49796, -0.14800], [-0.49629, -0.17436],
    [-0.49153, -0.20040], [-0.48208, -0.22446], [-0.46711, -0.24481], [-0.44713, -0.26056],
    [-0.42364, -0.27212], [-0.39825, -0.28070], [-0.37213, -0.28739], [-0.34593, -0.29278],
    [-0.31997, -0.29716], [-0.29445, -0.30094], [-0.26956, -0.30456], [-0.24539, -0.30800],
    [-0.22204, -0.31081], [-0.19969, -0.31276], [-0.17854, -0.31421], [-0.15856, -0.31554],
    [-0.13950, -0.31673], [-0.12121, -0.31766], [-0.10420, -0.31849], [-0.08910, -0.31955],
    [-0.07580, -0.32087], [-0.06302, -0.32215], [-0.04903, -0.32313], [-0.03269, -0.32372],
    [-0.01427, -0.32383], [0.00464, -0.32341], [0.02232, -0.32259], [0.03827, -0.32186],
    [0.05311, -0.32165], [0.06786, -0.32191], [0.08355, -0.32220], [0.10088, -0.32202],
    [0.11987, -0.32112], [0.13993, -0.31959], [0.16062, -0.31784], [0.18202, -0.31620],
    [0.20447, -0.31471], [0.22821, -0.31312], [0.25327, -0.31115], [0.27947, -0.30855],
    [0.30646, -0.30528], [0.33364, -0.30128], [0.36027, -0.29638], [0.38591, -0.29030],
    [0.41050, -0.28265], [0.43389, -0.27277], [0.45514, -0.25973], [0.47265, -0.24275],
    [0.48493, -0.22178], [0.49160, -0.19750], [0.49353, -0.17096], [0.49218, -0.14327],
    [0.48882, -0.11548], [0.48431, -0.08859], [0.47930, -0.06328], [0.47417, -0.03952],
];

/// Trace of the fourth catalog lens.
#[rustfmt::skip]
pub static DIGITIZED_4: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.47107, -0.01634], [0.46188, 0.00816], [0.45213, 0.03212], [0.44218, 0.05511],
    [0.43202, 0.07689], [0.42156, 0.09737], [0.41084, 0.11682], [0.39981, 0.13574],
    [0.38819, 0.15446], [0.37581, 0.17280], [0.36281, 0.19043], [0.34921, 0.20755],
    [0.33449, 0.22468], [0.31800, 0.24192], [0.29951, 0.25852], [0.27936, 0.27322],
    [0.25801, 0.28506], [0.23576, 0.29388], [0.21282, 0.30021], [0.18943, 0.30488],
    [0.16586, 0.30854], [0.14233, 0.31163], [0.11908, 0.31439], [0.09643, 0.31700],
    [0.07461, 0.31947], [0.05332, 0.32159], [0.03171, 0.32311], [0.00910, 0.32398],
    [-0.01435, 0.32436], [-0.03768, 0.32441], [-0.06011, 0.32409], [-0.08164, 0.32323],
    [-0.10277, 0.32168], [-0.12384, 0.31949], [-0.14476, 0.31685], [-0.16532, 0.31400],
    [-0.18549, 0.31112], [-0.20540, 0.30813], [-0.22525, 0.30481], [-0.24527, 0.30104],
    [-0.26578, 0.29688], [-0.28717, 0.29230], [-0.30955, 0.28706], [-0.33235, 0.28069],
    [-0.35436, 0.27264], [-0.37453, 0.26242], [-0.39264, 0.24963], [-0.40899, 0.23401],
    [-0.42348, 0.21556], [-0.43571, 0.19482], [-0.44569, 0.17278], [-0.45403, 0.15037],
    [-0.46127, 0.12800], [-0.46758, 0.10575], [-0.47304, 0.08362], [-0.47796, 0.06150],
    [-0.48263, 0.03901], [-0.48701, 0.01583], [-0.49078, -0.00798], [-0.49371, -0.03209],
    [-0.49583, -0.05618], [-0.49728, -0.08001], [-0.49812, -0.10329], [-0.49825, -0.12577],
    [-0.49727, -0.14753], [-0.49467, -0.16897], [-0.48981, -0.19029], [-0.48175, -0.21096],
    [-0.46956, -0.22982], [-0.45301, -0.24580], [-0.43288, -0.25858], [-0.41061, -0.26853],
    [-0.38765, -0.27644], [-0.36490, -0.28309], [-0.34246, -0.28900], [-0.31984, -0.29423],
    [-0.29683, -0.29866], [-0.27393, -0.30231], [-0.25191, -0.30554], [-0.23099, -0.30861],
    [-0.21039, -0.31146], [-0.18907, -0.31390], [-0.16681, -0.31596], [-0.14455, -0.31784],
    [-0.12351, -0.31960], [-0.10413, -0.32109], [-0.08583, -0.32218], [-0.06741, -0.32293],
    [-0.04770, -0.32350], [-0.02627, -0.32394], [-0.00409, -0.32416], [0.01708, -0.32407],
    [0.03644, -0.32363], [0.05487, -0.32279], [0.07369, -0.32154], [0.09333, -0.32000],
    [0.11353, -0.31831], [0.13400, -0.31641], [0.15463, -0.31409], [0.17537, -0.31113],
    [0.19644, -0.30752], [0.21840, -0.30341], [0.24156, -0.29886], [0.26562, -0.29376],
    [0.28997, -0.28797], [0.31422, -0.28144], [0.33822, -0.27415], [0.36186, -0.26614],
    [0.38499, -0.25736], [0.40753, -0.24759], [0.42936, -0.23628], [0.44992, -0.22278],
    [0.46792, -0.20644], [0.48175, -0.18687], [0.49033, -0.16430], [0.49382, -0.13974],
    [0.49339, -0.11459], [0.49039, -0.08976], [0.48557, -0.06533], [0.47911, -0.04092],
];

/// Trace of the fifth catalog lens.
#[rustfmt::skip]
pub static DIGITIZED_5: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.49171, -0.02357], [0.48731, 0.00121], [0.48156, 0.02464], [0.47464, 0.04687],
    [0.46692, 0.06773], [0.45901, 0.08694], [0.45139, 0.10487], [0.44396, 0.12275],
    [0.43596, 0.14174], [0.42646, 0.16216], [0.41494, 0.18325], [0.40126, 0.20384],
    [0.38555, 0.22289], [0.36811, 0.23982], [0.34935, 0.25448], [0.32949, 0.26702],
    [0.30849, 0.27748], [0.28656, 0.28584], [0.26429, 0.29229], [0.24208, 0.29721],
    [0.21991, 0.30095], [0.19785, 0.30386], [0.17647, 0.30648], [0.15640, 0.30923],
    [0.13766, 0.31211], [0.11950, 0.31484], [0.10080, 0.31725], [0.08067, 0.31935],
    [0.05894, 0.32113], [0.03602, 0.32253], [0.01258, 0.32347], [-0.01060, 0.32391],
    [-0.03278, 0.32375], [-0.05363, 0.32298], [-0.07345, 0.32176], [-0.09311, 0.32030],
    [-0.11349, 0.31878], [-0.13494, 0.31724], [-0.15716, 0.31561], [-0.17960, 0.31370],
    [-0.20201, 0.31137], [-0.22446, 0.30855], [-0.24712, 0.30499], [-0.27004, 0.30016],
    [-0.29316, 0.29360], [-0.31636, 0.28505], [-0.33929, 0.27417], [-0.36125, 0.26055],
    [-0.38141, 0.24409], [-0.39917, 0.22541], [-0.41441, 0.20547], [-0.42738, 0.18493],
    [-0.43836, 0.16410], [-0.44775, 0.14322], [-0.45626, 0.12230], [-0.46456, 0.10080],
    [-0.47275, 0.07788], [-0.48039, 0.05311], [-0.48704, 0.02687], [-0.49240, 0.00003],
    [-0.49621, -0.02644], [-0.49838, -0.05193], [-0.49918, -0.07635], [-0.49900, -0.10013],
    [-0.49776, -0.12367], [-0.49468, -0.14704], [-0.48877, -0.17005], [-0.47935, -0.19237],
    [-0.46625, -0.21336], [-0.44967, -0.23227], [-0.43005, -0.24873], [-0.40803, -0.26283],
    [-0.38435, -0.27481], [-0.35967, -0.28485], [-0.33449, -0.29300], [-0.30929, -0.29929],
    [-0.28453, -0.30382], [-0.26066, -0.30701], [-0.23813, -0.30952], [-0.21725, -0.31184],
    [-0.19799, -0.31397], [-0.18001, -0.31572], [-0.16290, -0.31708], [-0.14648, -0.31830],
    [-0.13064, -0.31952], [-0.11503, -0.32060], [-0.09906, -0.32137], [-0.08189, -0.32198],
    [-0.06252, -0.32270], [-0.04021, -0.32349], [-0.01520, -0.32407], [0.01117, -0.32416],
    [0.03701, -0.32359], [0.06079, -0.32236], [0.08205, -0.32077], [0.10159, -0.31923],
    [0.12079, -0.31780], [0.14070, -0.31618], [0.16148, -0.31407], [0.18261, -0.31150],
    [0.20349, -0.30866], [0.22407, -0.30561], [0.24499, -0.30212], [0.26696, -0.29791],
    [0.29014, -0.29287], [0.31415, -0.28693], [0.33835, -0.27989], [0.36209, -0.27151],
    [0.38477, -0.26182], [0.40609, -0.25097], [0.42593, -0.23872], [0.44402, -0.22448],
    [0.45972, -0.20796], [0.47248, -0.18952], [0.48226, -0.16973], [0.48929, -0.14870],
    [0.49378, -0.12613], [0.49594, -0.10183], [0.49613, -0.07605], [0.49466, -0.04959],
];

/// Trace of the sixth catalog lens.
#[rustfmt::skip]
pub static DIGITIZED_6: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.48404, -0.02297], [0.47782, 0.00246], [0.47096, 0.02629], [0.46347, 0.04830],
    [0.45524, 0.06872], [0.44629, 0.08822], [0.43670, 0.10765], [0.42632, 0.12751],
    [0.41463, 0.14780], [0.40093, 0.16804], [0.38483, 0.18761], [0.36647, 0.20588],
    [0.34640, 0.22260], [0.32527, 0.23784], [0.30352, 0.25171], [0.28135, 0.26416],
    [0.25890, 0.27508], [0.23633, 0.28444], [0.21378, 0.29228], [0.19131, 0.29868],
    [0.16892, 0.30381], [0.14671, 0.30787], [0.12497, 0.31109], [0.10395, 0.31368],
    [0.08358, 0.31591], [0.06340, 0.31805], [0.04259, 0.32023], [0.02043, 0.32220],
    [-0.00310, 0.32359], [-0.02710, 0.32424], [-0.05044, 0.32433], [-0.07254, 0.32406],
    [-0.09351, 0.32344], [-0.11357, 0.32224], [-0.13295, 0.32034], [-0.15201, 0.31799],
    [-0.17141, 0.31556], [-0.19186, 0.31323], [-0.21394, 0.31082], [-0.23789, 0.30795],
    [-0.26336, 0.30419], [-0.28948, 0.29910], [-0.31531, 0.29220], [-0.34035, 0.28309],
    [-0.36446, 0.27148], [-0.38735, 0.25711], [-0.40837, 0.23984], [-0.42681, 0.21986],
    [-0.44221, 0.19785], [-0.45459, 0.17465], [-0.46447, 0.15094], [-0.47253, 0.12690],
    [-0.47914, 0.10237], [-0.48443, 0.07735], [-0.48867, 0.05219], [-0.49220, 0.02714],
    [-0.49504, 0.00205], [-0.49679, -0.02331], [-0.49714, -0.04884], [-0.49622, -0.07415],
    [-0.49440, -0.09897], [-0.49165, -0.12321], [-0.48730, -0.14687], [-0.48028, -0.16997],
    [-0.46968, -0.19232], [-0.45525, -0.21331], [-0.43746, -0.23204], [-0.41717, -0.24780],
    [-0.39519, -0.26051], [-0.37203, -0.27060], [-0.34790, -0.27871], [-0.32292, -0.28537],
    [-0.29749, -0.29100], [-0.27242, -0.29588], [-0.24861, -0.30021], [-0.22649, -0.30401],
    [-0.20576, -0.30714], [-0.18593, -0.30950], [-0.16690, -0.31133], [-0.14884, -0.31308],
    [-0.13191, -0.31504], [-0.11600, -0.31713], [-0.10102, -0.31903], [-0.08698, -0.32055],
    [-0.07367, -0.32160], [-0.06017, -0.32218], [-0.04524, -0.32236], [-0.02840, -0.32224],
    [-0.01052, -0.32191], [0.00685, -0.32153], [0.02258, -0.32134], [0.03662, -0.32149],
    [0.04985, -0.32190], [0.06340, -0.32232], [0.07799, -0.32244], [0.09370, -0.32201],
    [0.11029, -0.32103], [0.12783, -0.31968], [0.14662, -0.31823], [0.16680, -0.31685],
    [0.18815, -0.31557], [0.21036, -0.31411], [0.23332, -0.31197], [0.25718, -0.30881],
    [0.28208, -0.30472], [0.30782, -0.29999], [0.33361, -0.29470], [0.35855, -0.28863],
    [0.38225, -0.28131], [0.40482, -0.27205], [0.42636, -0.26010], [0.44643, -0.24483],
    [0.46410, -0.22605], [0.47837, -0.20414], [0.48859, -0.17993], [0.49467, -0.15451],
    [0.49709, -0.12865], [0.49654, -0.10258], [0.49380, -0.07615], [0.48947, -0.04943],
];

/// Trace of the seventh catalog lens.
#[rustfmt::skip]
pub static DIGITIZED_7: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.48788, -0.00762], [0.48379, 0.01830], [0.47881, 0.04356], [0.47301, 0.06802],
    [0.46636, 0.09194], [0.45861, 0.11574], [0.44917, 0.13948], [0.43730, 0.16259],
    [0.42250, 0.18399], [0.40491, 0.20260], [0.38537, 0.21801], [0.36485, 0.23076],
    [0.34374, 0.24177], [0.32197, 0.25152], [0.29984, 0.25989], [0.27819, 0.26691],
    [0.25765, 0.27314], [0.23801, 0.27918], [0.21859, 0.28501], [0.19896, 0.29025],
    [0.17916, 0.29472], [0.15959, 0.29859], [0.14076, 0.30219], [0.12287, 0.30584],
    [0.10541, 0.30948], [0.08742, 0.31280], [0.06834, 0.31566], [0.04828, 0.31827],
    [0.02753, 0.32077], [0.00611, 0.32293], [-0.01588, 0.32437], [-0.03786, 0.32496],
    [-0.05910, 0.32489], [-0.07946, 0.32452], [-0.09951, 0.32411], [-0.11994, 0.32361],
    [-0.14099, 0.32277], [-0.16247, 0.32131], [-0.18398, 0.31902], [-0.20535, 0.31585],
    [-0.22696, 0.31186], [-0.24959, 0.30707], [-0.27374, 0.30129], [-0.29918, 0.29420],
    [-0.32521, 0.28572], [-0.35122, 0.27600], [-0.37677, 0.26510], [-0.40132, 0.25264],
    [-0.42409, 0.23798], [-0.44413, 0.22070], [-0.46057, 0.20081], [-0.47295, 0.17874],
    [-0.48150, 0.15499], [-0.48711, 0.13000], [-0.49085, 0.10418], [-0.49361, 0.07804],
    [-0.49578, 0.05200], [-0.49729, 0.02602], [-0.49795, -0.00037], [-0.49780, -0.02741],
    [-0.49693, -0.05481], [-0.49512, -0.08195], [-0.49171, -0.10823], [-0.48591, -0.13336],
    [-0.47710, -0.15722], [-0.46488, -0.17956], [-0.44905, -0.19979], [-0.42986, -0.21732],
    [-0.40833, -0.23201], [-0.38591, -0.24419], [-0.36381, -0.25432], [-0.34257, -0.26279],
    [-0.32209, -0.27005], [-0.30177, -0.27650], [-0.28096, -0.28233], [-0.25950, -0.28764],
    [-0.23778, -0.29247], [-0.21632, -0.29696], [-0.19552, -0.30113], [-0.17567, -0.30489],
    [-0.15694, -0.30808], [-0.13941, -0.31068], [-0.12311, -0.31272], [-0.10800, -0.31429],
    [-0.09364, -0.31557], [-0.07896, -0.31690], [-0.06278, -0.31861], [-0.04439, -0.32067],
    [-0.02405, -0.32257], [-0.00314, -0.32369], [0.01635, -0.32389], [0.03302, -0.32343],
    [0.04707, -0.32262], [0.05993, -0.32172], [0.07311, -0.32089], [0.08757, -0.32005],
    [0.10381, -0.31904], [0.12181, -0.31793], [0.14110, -0.31672], [0.16104, -0.31510],
    [0.18121, -0.31267], [0.20152, -0.30941], [0.22224, -0.30552], [0.24391, -0.30109],
    [0.26718, -0.29612], [0.29218, -0.29058], [0.31839, -0.28433], [0.34500, -0.27704],
    [0.37138, -0.26835], [0.39710, -0.25800], [0.42165, -0.24565], [0.44409, -0.23065],
    [0.46324, -0.21240], [0.47806, -0.19079], [0.48810, -0.16642], [0.49366, -0.14029],
    [0.49563, -0.11344], [0.49524, -0.08661], [0.49354, -0.06010], [0.49109, -0.03381],
];

/// Trace of the eighth catalog lens.
#[rustfmt::skip]
pub static DIGITIZED_8: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.47960, -0.01730], [0.47160, 0.00748], [0.46254, 0.03063], [0.45282, 0.05187],
    [0.44261, 0.07138], [0.43181, 0.08976], [0.42014, 0.10769], [0.40736, 0.12553],
    [0.39330, 0.14322], [0.37790, 0.16038], [0.36120, 0.17672], [0.34339, 0.19209],
    [0.32491, 0.20651], [0.30610, 0.22020], [0.28696, 0.23343], [0.26731, 0.24615],
    [0.24703, 0.25799], [0.22629, 0.26860], [0.20549, 0.27788], [0.18517, 0.28597],
    [0.16557, 0.29300], [0.14645, 0.29899], [0.12729, 0.30386], [0.10769, 0.30765],
    [0.08766, 0.31074], [0.06738, 0.31362], [0.04679, 0.31654], [0.02561, 0.31935],
    [0.00371, 0.32163], [-0.01851, 0.32297], [-0.04049, 0.32322], [-0.06199, 0.32253],
    [-0.08316, 0.32108], [-0.10416, 0.31884], [-0.12488, 0.31569], [-0.14519, 0.31177],
    [-0.16521, 0.30752], [-0.18519, 0.30320], [-0.20539, 0.29867], [-0.22615, 0.29345],
    [-0.24779, 0.28692], [-0.27025, 0.27873], [-0.29320, 0.26905], [-0.31633, 0.25836],
    [-0.33923, 0.24689], [-0.36125, 0.23453], [-0.38176, 0.22115], [-0.40053, 0.20660],
    [-0.41772, 0.19063], [-0.43350, 0.17294], [-0.44779, 0.15356], [-0.46045, 0.13287],
    [-0.47145, 0.11135], [-0.48060, 0.08933], [-0.48754, 0.06698], [-0.49209, 0.04448],
    [-0.49456, 0.02209], [-0.49542, 0.00002], [-0.49485, -0.02179], [-0.49256, -0.04343],
    [-0.48804, -0.06485], [-0.48119, -0.08596], [-0.47240, -0.10685], [-0.46215, -0.12755],
    [-0.45054, -0.14778], [-0.43741, -0.16706], [-0.42281, -0.18498], [-0.40707, -0.20133],
    [-0.39047, -0.21598], [-0.37310, -0.22890], [-0.35490, -0.24026], [-0.33584, -0.25041],
    [-0.31600, -0.25958], [-0.29556, -0.26778], [-0.27484, -0.27491], [-0.25421, -0.28098],
    [-0.23403, -0.28616], [-0.21442, -0.29075], [-0.19512, -0.29513], [-0.17577, -0.29960],
    [-0.15638, -0.30416], [-0.13724, -0.30837], [-0.11871, -0.31159], [-0.10113, -0.31354],
    [-0.08462, -0.31465], [-0.06869, -0.31573], [-0.05213, -0.31719], [-0.03392, -0.31883],
    [-0.01431, -0.32026], [0.00527, -0.32128], [0.02331, -0.32189], [0.03933, -0.32217],
    [0.05409, -0.32232], [0.06877, -0.32239], [0.08417, -0.32218], [0.10047, -0.32153],
    [0.11760, -0.32046], [0.13547, -0.31911], [0.15396, -0.31748], [0.17295, -0.31541],
    [0.19244, -0.31271], [0.21257, -0.30928], [0.23352, -0.30520], [0.25541, -0.30064],
    [0.27835, -0.29577], [0.30242, -0.29063], [0.32749, -0.28496], [0.35315, -0.27829],
    [0.37873, -0.27020], [0.40355, -0.26038], [0.42684, -0.24846], [0.44777, -0.23377],
    [0.46551, -0.21588], [0.47939, -0.19498], [0.48900, -0.17186], [0.49433, -0.14734],
    [0.49587, -0.12191], [0.49455, -0.09587], [0.49119, -0.06950], [0.48618, -0.04315],
];

/// Trace of the ninth catalog lens.
#[rustfmt::skip]
pub static DIGITIZED_9: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.48079, -0.01975], [0.47301, 0.00539], [0.46470, 0.03040], [0.45588, 0.05444],
    [0.44663, 0.07712], [0.43722, 0.09888], [0.42787, 0.12054], [0.41836, 0.14254],
    [0.40817, 0.16486], [0.39687, 0.18731], [0.38436, 0.20975], [0.37076, 0.23193],
    [0.35607, 0.25343], [0.34004, 0.27365], [0.32231, 0.29196], [0.30277, 0.30785],
    [0.28172, 0.32103], [0.25964, 0.33142], [0.23691, 0.33916], [0.21371, 0.34472],
    [0.19034, 0.34875], [0.16735, 0.35181], [0.14528, 0.35420], [0.12430, 0.35618],
    [0.10419, 0.35799], [0.08440, 0.35976], [0.06400, 0.36141], [0.04197, 0.36275],
    [0.01780, 0.36364], [-0.00798, 0.36408], [-0.03407, 0.36413], [-0.05913, 0.36384],
    [-0.08240, 0.36311], [-0.10397, 0.36194], [-0.12470, 0.36044], [-0.14560, 0.35866],
    [-0.16711, 0.35633], [-0.18903, 0.35317], [-0.21112, 0.34905], [-0.23344, 0.34367],
    [-0.25601, 0.33628], [-0.27831, 0.32596], [-0.29941, 0.31216], [-0.31851, 0.29497],
    [-0.33548, 0.27510], [-0.35077, 0.25356], [-0.36483, 0.23136], [-0.37767, 0.20930],
    [-0.38905, 0.18789], [-0.39905, 0.16720], [-0.40817, 0.14692], [-0.41679, 0.12679],
    [-0.42493, 0.10689], [-0.43242, 0.08752], [-0.43910, 0.06873], [-0.44507, 0.05030],
    [-0.45081, 0.03182], [-0.45694, 0.01267], [-0.46370, -0.00765], [-0.47062, -0.02905],
    [-0.47704, -0.05089], [-0.48261, -0.07284], [-0.48738, -0.09525], [-0.49147, -0.11872],
    [-0.49479, -0.14352], [-0.49700, -0.16945], [-0.49738, -0.19603], [-0.49500, -0.22257],
    [-0.48892, -0.24815], [-0.47855, -0.27171], [-0.46386, -0.29237], [-0.44544, -0.30980],
    [-0.42410, -0.32413], [-0.40054, -0.33556], [-0.37529, -0.34417], [-0.34889, -0.35022],
    [-0.32200, -0.35429], [-0.29536, -0.35719], [-0.26961, -0.35950], [-0.24510, -0.36134],
    [-0.22176, -0.36249], [-0.19938, -0.36281], [-0.17791, -0.36254], [-0.15749, -0.36209],
    [-0.13816, -0.36168], [-0.11973, -0.36128], [-0.10183, -0.36081], [-0.08377, -0.36018],
    [-0.06452, -0.35933], [-0.04331, -0.35814], [-0.02045, -0.35653], [0.00275, -0.35452],
    [0.02486, -0.35217], [0.04541, -0.34952], [0.06492, -0.34648], [0.08429, -0.34301],
    [0.10401, -0.33936], [0.12411, -0.33584], [0.14439, -0.33238], [0.16469, -0.32858],
    [0.18505, -0.32430], [0.20583, -0.31972], [0.22750, -0.31493], [0.25039, -0.30968],
    [0.27437, -0.30361], [0.29898, -0.29650], [0.32377, -0.28835], [0.34843, -0.27928],
    [0.37271, -0.26927], [0.39635, -0.25800], [0.41894, -0.24489], [0.43984, -0.22945],
    [0.45828, -0.21151], [0.47356, -0.19124], [0.48518, -0.16899], [0.49279, -0.14507],
    [0.49637, -0.11995], [0.49626, -0.09442], [0.49313, -0.06925], [0.48771, -0.04453],
];

/// Trace of the tenth catalog lens.
#[rustfmt::skip]
pub static DIGITIZED_10: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.49412, -0.02248], [0.49002, 0.00292], [0.48438, 0.02797], [0.47702, 0.05235],
    [0.46798, 0.07613], [0.45767, 0.09950], [0.44654, 0.12230], [0.43473, 0.14411],
    [0.42208, 0.16472], [0.40830, 0.18452], [0.39318, 0.20413], [0.37661, 0.22378],
    [0.35862, 0.24301], [0.33948, 0.26117], [0.31956, 0.27786], [0.29918, 0.29297],
    [0.27840, 0.30658], [0.25719, 0.31889], [0.23556, 0.33013], [0.21353, 0.34039],
    [0.19117, 0.34955], [0.16877, 0.35740], [0.14675, 0.36375], [0.12442, 0.36843],
    [0.10486, 0.37138], [0.08518, 0.37275], [0.06660, 0.37304], [0.04902, 0.37288],
    [0.03152, 0.37273], [0.01260, 0.37260], [-0.00874, 0.37194], [-0.03228, 0.37003],
    [-0.05687, 0.36645], [-0.08124, 0.36133], [-0.10439, 0.35519], [-0.12573, 0.34857],
    [-0.14525, 0.34172], [-0.16343, 0.33453], [-0.18056, 0.32686], [-0.19656, 0.31879],
    [-0.21139, 0.31040], [-0.22548, 0.30167], [-0.23964, 0.29238], [-0.25470, 0.28209],
    [-0.27126, 0.27015], [-0.28940, 0.25610], [-0.30856, 0.23998], [-0.32770, 0.22230],
    [-0.34566, 0.20384], [-0.36167, 0.18526], [-0.37567, 0.16679], [-0.38823, 0.14830],
    [-0.40013, 0.12960], [-0.41192, 0.11069], [-0.42376, 0.09157], [-0.43535, 0.07205],
    [-0.44611, 0.05185], [-0.45561, 0.03074], [-0.46391, 0.00867], [-0.47134, -0.01432],
    [-0.47818, -0.03816], [-0.48440, -0.06270], [-0.48979, -0.08782], [-0.49408, -0.11332],
    [-0.49702, -0.13893], [-0.49839, -0.16432], [-0.49779, -0.18930], [-0.49444, -0.21368],
    [-0.48727, -0.23693], [-0.47547, -0.25810], [-0.45911, -0.27626], [-0.43919, -0.29113],
    [-0.41712, -0.30330], [-0.39417, -0.31379], [-0.37109, -0.32344], [-0.34812, -0.33252],
    [-0.32527, -0.34091], [-0.30255, -0.34839], [-0.28001, -0.35472], [-0.25767, -0.35972],
    [-0.23580, -0.36348], [-0.21481, -0.36656], [-0.19481, -0.36952], [-0.17543, -0.37244],
    [-0.15620, -0.37503], [-0.13701, -0.37699], [-0.11805, -0.37817], [-0.09947, -0.37860],
    [-0.08106, -0.37856], [-0.06230, -0.37852], [-0.04255, -0.37869], [-0.02154, -0.37867],
    [0.00041, -0.37786], [0.02287, -0.37614], [0.04553, -0.37384], [0.06807, -0.37111],
    [0.09003, -0.36771], [0.11134, -0.36350], [0.13230, -0.35876], [0.15311, -0.35382],
    [0.17362, -0.34858], [0.19384, -0.34264], [0.21443, -0.33580], [0.23622, -0.32809],
    [0.25941, -0.31958], [0.28342, -0.31020], [0.30740, -0.29987], [0.33086, -0.28850],
    [0.35367, -0.27599], [0.37591, -0.26216], [0.39753, -0.24676], [0.41815, -0.22957],
    [0.43710, -0.21063], [0.45377, -0.19026], [0.46786, -0.16879], [0.47933, -0.14628],
    [0.48811, -0.12265], [0.49394, -0.09806], [0.49665, -0.07302], [0.49651, -0.04783],
];

/// Trace of the eleventh catalog lens.
#[rustfmt::skip]
pub static DIGITIZED_11: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.49816, -0.00961], [0.49614, 0.01744], [0.49279, 0.04273], [0.48824, 0.06606],
    [0.48254, 0.08815], [0.47587, 0.11001], [0.46862, 0.13217], [0.46096, 0.15464],
    [0.45248, 0.17744], [0.44258, 0.20077], [0.43104, 0.22466], [0.41795, 0.24876],
    [0.40348, 0.27260], [0.38774, 0.29586], [0.37083, 0.31849], [0.35283, 0.34041],
    [0.33369, 0.36132], [0.31338, 0.38077], [0.29208, 0.39869], [0.27017, 0.41538],
    [0.24792, 0.43099], [0.22528, 0.44520], [0.20208, 0.45755], [0.17835, 0.46788],
    [0.15431, 0.47649], [0.13013, 0.48381], [0.10574, 0.48999], [0.08080, 0.49472],
    [0.05487, 0.49769], [0.02785, 0.49897], [0.00034, 0.49887], [-0.02657, 0.49763],
    [-0.05226, 0.49530], [-0.07708, 0.49170], [-0.10203, 0.48659], [-0.12783, 0.47998],
    [-0.15435, 0.47204], [-0.18089, 0.46272], [-0.20675, 0.45169], [-0.23167, 0.43883],
    [-0.25576, 0.42449], [-0.27917, 0.40897], [-0.30185, 0.39211], [-0.32352, 0.37360],
    [-0.34390, 0.35358], [-0.36282, 0.33260], [-0.38021, 0.31112], [-0.39599, 0.28932],
    [-0.41018, 0.26718], [-0.42296, 0.24471], [-0.43473, 0.22194], [-0.44585, 0.19884],
    [-0.45629, 0.17546], [-0.46557, 0.15198], [-0.47308, 0.12872], [-0.47869, 0.10590],
    [-0.48294, 0.08344], [-0.48671, 0.06084], [-0.49052, 0.03728], [-0.49411, 0.01205],
    [-0.49673, -0.01494], [-0.49774, -0.04302], [-0.49683, -0.07110], [-0.49402, -0.09835],
    [-0.48937, -0.12462], [-0.48289, -0.15035], [-0.47462, -0.17605], [-0.46471, -0.20193],
    [-0.45340, -0.22785], [-0.44083, -0.25333], [-0.42702, -0.27783], [-0.41200, -0.30114],
    [-0.39569, -0.32336], [-0.37792, -0.34447], [-0.35864, -0.36435], [-0.33807, -0.38284],
    [-0.31658, -0.39982], [-0.29448, -0.41513], [-0.27199, -0.42872], [-0.24928, -0.44079],
    [-0.22637, -0.45160], [-0.20315, -0.46126], [-0.17970, -0.46957], [-0.15628, -0.47627],
    [-0.13304, -0.48159], [-0.10982, -0.48622], [-0.08643, -0.49063], [-0.06272, -0.49453],
    [-0.03837, -0.49728], [-0.01298, -0.49847], [0.01343, -0.49804], [0.04019, -0.49622],
    [0.06637, -0.49343], [0.09126, -0.48996], [0.11463, -0.48581], [0.13658, -0.48080],
    [0.15754, -0.47482], [0.17822, -0.46769], [0.19951, -0.45912], [0.22198, -0.44907],
    [0.24523, -0.43777], [0.26822, -0.42531], [0.29037, -0.41156], [0.31192, -0.39639],
    [0.33324, -0.37991], [0.35414, -0.36223], [0.37408, -0.34353], [0.39261, -0.32420],
    [0.40950, -0.30456], [0.42469, -0.28419], [0.43833, -0.26227], [0.45068, -0.23835],
    [0.46180, -0.21289], [0.47149, -0.18698], [0.47957, -0.16182], [0.48611, -0.13789],
    [0.49130, -0.11453], [0.49519, -0.09043], [0.49768, -0.06469], [0.49869, -0.03742],
];

/// Trace of the twelfth catalog lens.
#[rustfmt::skip]
pub static DIGITIZED_12: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.46660, -0.02120], [0.45665, 0.00240], [0.44590, 0.02469], [0.43451, 0.04537],
    [0.42245, 0.06462], [0.40970, 0.08277], [0.39634, 0.10002], [0.38265, 0.11650],
    [0.36892, 0.13227], [0.35526, 0.14719], [0.34144, 0.16118], [0.32689, 0.17446],
    [0.31081, 0.18745], [0.29264, 0.20034], [0.27248, 0.21299], [0.25105, 0.22524],
    [0.22930, 0.23693], [0.20806, 0.24775], [0.18807, 0.25733], [0.16970, 0.26556],
    [0.15269, 0.27266], [0.13629, 0.27892], [0.11974, 0.28448], [0.10248, 0.28944],
    [0.08440, 0.29404], [0.06575, 0.29860], [0.04675, 0.30323], [0.02712, 0.30777],
    [0.00639, 0.31193], [-0.01536, 0.31554], [-0.03712, 0.31838], [-0.05771, 0.32030],
    [-0.07682, 0.32134], [-0.09517, 0.32179], [-0.11359, 0.32197], [-0.13243, 0.32197],
    [-0.15163, 0.32170], [-0.17101, 0.32098], [-0.19040, 0.31957], [-0.20975, 0.31712],
    [-0.22936, 0.31327], [-0.24977, 0.30790], [-0.27137, 0.30109], [-0.29401, 0.29293],
    [-0.31698, 0.28320], [-0.33943, 0.27165], [-0.36101, 0.25829], [-0.38172, 0.24333],
    [-0.40150, 0.22678], [-0.41995, 0.20850], [-0.43662, 0.18849], [-0.45131, 0.16707],
    [-0.46397, 0.14479], [-0.47452, 0.12231], [-0.48289, 0.10013], [-0.48916, 0.07828],
    [-0.49362, 0.05623], [-0.49656, 0.03339], [-0.49812, 0.00959], [-0.49835, -0.01481],
    [-0.49728, -0.03911], [-0.49501, -0.06270], [-0.49142, -0.08537], [-0.48609, -0.10747],
    [-0.47850, -0.12956], [-0.46828, -0.15179], [-0.45537, -0.17364], [-0.44011, -0.19424],
    [-0.42319, -0.21282], [-0.40510, -0.22897], [-0.38578, -0.24267], [-0.36488, -0.25427],
    [-0.34253, -0.26436], [-0.31943, -0.27344], [-0.29635, -0.28154], [-0.27369, -0.28844],
    [-0.25156, -0.29399], [-0.23008, -0.29827], [-0.20961, -0.30144], [-0.19049, -0.30375],
    [-0.17280, -0.30558], [-0.15642, -0.30730], [-0.14118, -0.30905], [-0.12674, -0.31072],
    [-0.11249, -0.31218], [-0.09774, -0.31352], [-0.08198, -0.31485], [-0.06477, -0.31609],
    [-0.04578, -0.31715], [-0.02504, -0.31818], [-0.00317, -0.31941], [0.01882, -0.32072],
    [0.04006, -0.32173], [0.06033, -0.32218], [0.08017, -0.32205], [0.10017, -0.32138],
    [0.12030, -0.32034], [0.14017, -0.31923], [0.15980, -0.31830], [0.17965, -0.31748],
    [0.20017, -0.31640], [0.22159, -0.31482], [0.24409, -0.31266], [0.26789, -0.30992],
    [0.29296, -0.30647], [0.31890, -0.30206], [0.34513, -0.29645], [0.37110, -0.28939],
    [0.39629, -0.28057], [0.42007, -0.26956], [0.44173, -0.25585], [0.46046, -0.23902],
    [0.47546, -0.21893], [0.48610, -0.19594], [0.49219, -0.17094], [0.49409, -0.14506],
    [0.49264, -0.11930], [0.48872, -0.09419], [0.48290, -0.06969], [0.47545, -0.04539],
];

/// Trace of the thirteenth catalog lens.
#[rustfmt::skip]
pub static DIGITIZED_13: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.49026, -0.02174], [0.48577, -0.00085], [0.47980, 0.02004], [0.47243, 0.04124],
    [0.46374, 0.06265], [0.45368, 0.08389], [0.44233, 0.10438], [0.42991, 0.12376],
    [0.41648, 0.14227], [0.40166, 0.16037], [0.38509, 0.17807], [0.36704, 0.19487],
    [0.34837, 0.21028], [0.32972, 0.22423], [0.31095, 0.23693], [0.29148, 0.24866],
    [0.27121, 0.25953], [0.25078, 0.26944], [0.23074, 0.27824], [0.21098, 0.28580],
    [0.19101, 0.29208], [0.17066, 0.29729], [0.15014, 0.30190], [0.12970, 0.30635],
    [0.10952, 0.31066], [0.08974, 0.31451], [0.07033, 0.31757], [0.05080, 0.31979],
    [0.03045, 0.32132], [0.00914, 0.32214], [-0.01225, 0.32209], [-0.03252, 0.32127],
    [-0.05135, 0.31994], [-0.06945, 0.31813], [-0.08763, 0.31551], [-0.10614, 0.31196],
    [-0.12482, 0.30779], [-0.14356, 0.30340], [-0.16220, 0.29887], [-0.18050, 0.29394],
    [-0.19847, 0.28816], [-0.21655, 0.28120], [-0.23524, 0.27291], [-0.25468, 0.26336],
    [-0.27463, 0.25268], [-0.29465, 0.24105], [-0.31421, 0.22870], [-0.33289, 0.21578],
    [-0.35058, 0.20222], [-0.36727, 0.18789], [-0.38262, 0.17282], [-0.39636, 0.15718],
    [-0.40888, 0.14106], [-0.42097, 0.12426], [-0.43310, 0.10637], [-0.44508, 0.08707],
    [-0.45643, 0.06634], [-0.46675, 0.04446], [-0.47585, 0.02174], [-0.48360, -0.00159],
    [-0.48978, -0.02534], [-0.49425, -0.04928], [-0.49679, -0.07329], [-0.49705, -0.09727],
    [-0.49449, -0.12081], [-0.48867, -0.14332], [-0.47940, -0.16442], [-0.46670, -0.18391],
    [-0.45095, -0.20156], [-0.43292, -0.21710], [-0.41340, -0.23055], [-0.39270, -0.24219],
    [-0.37081, -0.25244], [-0.34793, -0.26168], [-0.32459, -0.27022], [-0.30120, -0.27813],
    [-0.27782, -0.28516], [-0.25449, -0.29092], [-0.23173, -0.29541], [-0.21018, -0.29915],
    [-0.18997, -0.30265], [-0.17085, -0.30600], [-0.15270, -0.30900], [-0.13572, -0.31159],
    [-0.11985, -0.31379], [-0.10444, -0.31553], [-0.08865, -0.31678], [-0.07189, -0.31777],
    [-0.05382, -0.31890], [-0.03414, -0.32031], [-0.01291, -0.32150], [0.00915, -0.32184],
    [0.03098, -0.32120], [0.05186, -0.32011], [0.07181, -0.31908], [0.09147, -0.31809],
    [0.11155, -0.31670], [0.13242, -0.31452], [0.15391, -0.31145], [0.17553, -0.30778],
    [0.19676, -0.30397], [0.21741, -0.30014], [0.23772, -0.29596], [0.25813, -0.29096],
    [0.27894, -0.28491], [0.30026, -0.27784], [0.32212, -0.26979], [0.34441, -0.26060],
    [0.36674, -0.25007], [0.38859, -0.23815], [0.40952, -0.22495], [0.42916, -0.21055],
    [0.44710, -0.19480], [0.46283, -0.17742], [0.47586, -0.15812], [0.48573, -0.13680],
    [0.49209, -0.11376], [0.49501, -0.08981], [0.49514, -0.06605], [0.49339, -0.04330],
];

/// Trace of the fourteenth catalog lens.
#[rustfmt::skip]
pub static DIGITIZED_14: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.48780, -0.01300], [0.48090, 0.01076], [0.47255, 0.03287], [0.46329, 0.05338],
    [0.45328, 0.07272], [0.44244, 0.09117], [0.43104, 0.10861], [0.41966, 0.12484],
    [0.40848, 0.13984], [0.39683, 0.15389], [0.38385, 0.16759], [0.36922, 0.18150],
    [0.35330, 0.19567], [0.33676, 0.20947], [0.32026, 0.22215], [0.30389, 0.23353],
    [0.28712, 0.24401], [0.26939, 0.25414], [0.25063, 0.26403], [0.23134, 0.27333],
    [0.21221, 0.28152], [0.19357, 0.28829], [0.17513, 0.29377], [0.15621, 0.29846],
    [0.13641, 0.30289], [0.11604, 0.30739], [0.09582, 0.31196], [0.07633, 0.31629],
    [0.05753, 0.31983], [0.03864, 0.32205], [0.01886, 0.32271], [-0.00161, 0.32194],
    [-0.02173, 0.32012], [-0.04063, 0.31783], [-0.05828, 0.31547], [-0.07524, 0.31307],
    [-0.09238, 0.31038], [-0.11049, 0.30705], [-0.12982, 0.30273], [-0.14975, 0.29731],
    [-0.16937, 0.29118], [-0.18827, 0.28474], [-0.20676, 0.27773], [-0.22545, 0.26940],
    [-0.24473, 0.25927], [-0.26449, 0.24756], [-0.28423, 0.23493], [-0.30330, 0.22185],
    [-0.32124, 0.20836], [-0.33804, 0.19432], [-0.35403, 0.17980], [-0.36944, 0.16507],
    [-0.38437, 0.15020], [-0.39885, 0.13480], [-0.41297, 0.11839], [-0.42674, 0.10063],
    [-0.44004, 0.08139], [-0.45274, 0.06070], [-0.46470, 0.03870], [-0.47556, 0.01559],
    [-0.48464, -0.00835], [-0.49113, -0.03266], [-0.49426, -0.05669], [-0.49348, -0.07987],
    [-0.48861, -0.10186], [-0.47987, -0.12249], [-0.46779, -0.14151], [-0.45293, -0.15878],
    [-0.43584, -0.17442], [-0.41735, -0.18869], [-0.39840, -0.20186], [-0.37951, -0.21419],
    [-0.36056, -0.22577], [-0.34122, -0.23639], [-0.32139, -0.24589], [-0.30131, -0.25455],
    [-0.28131, -0.26279], [-0.26155, -0.27072], [-0.24198, -0.27808], [-0.22261, -0.28458],
    [-0.20341, -0.29016], [-0.18430, -0.29494], [-0.16533, -0.29925], [-0.14671, -0.30353],
    [-0.12840, -0.30791], [-0.11000, -0.31200], [-0.09104, -0.31531], [-0.07128, -0.31774],
    [-0.05055, -0.31959], [-0.02865, -0.32112], [-0.00565, -0.32220], [0.01767, -0.32246],
    [0.04003, -0.32180], [0.06064, -0.32045], [0.07986, -0.31869], [0.09886, -0.31664],
    [0.11854, -0.31431], [0.13897, -0.31157], [0.15956, -0.30817], [0.17969, -0.30392],
    [0.19908, -0.29886], [0.21792, -0.29310], [0.23670, -0.28675], [0.25607, -0.27986],
    [0.27648, -0.27252], [0.29768, -0.26481], [0.31879, -0.25670], [0.33902, -0.24802],
    [0.35848, -0.23850], [0.37788, -0.22776], [0.39760, -0.21542], [0.41736, -0.20130],
    [0.43647, -0.18556], [0.45404, -0.16861], [0.46912, -0.15075], [0.48095, -0.13170],
    [0.48916, -0.11081], [0.49368, -0.08781], [0.49472, -0.06318], [0.49260, -0.03792],
];

/// Trace of the fifteenth catalog lens.
#[rustfmt::skip]
pub static DIGITIZED_15: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.49817, 0.01265], [0.49663, 0.04026], [0.49385, 0.06545], [0.48958, 0.08807],
    [0.48355, 0.10908], [0.47566, 0.12958], [0.46580, 0.15016], [0.45374, 0.17102],
    [0.43971, 0.19210], [0.42474, 0.21308], [0.41003, 0.23367], [0.39578, 0.25404],
    [0.38111, 0.27470], [0.36509, 0.29590], [0.34762, 0.31749], [0.32925, 0.33918],
    [0.31069, 0.36060], [0.29242, 0.38124], [0.27451, 0.40043], [0.25676, 0.41779],
    [0.23879, 0.43339], [0.22020, 0.44743], [0.20051, 0.45973], [0.17949, 0.46969],
    [0.15737, 0.47684], [0.13461, 0.48127], [0.11137, 0.48360], [0.08744, 0.48462],
    [0.06267, 0.48491], [0.03734, 0.48483], [0.01204, 0.48455], [-0.01279, 0.48409],
    [-0.03716, 0.48342], [-0.06130, 0.48255], [-0.08509, 0.48144], [-0.10817, 0.47971],
    [-0.13024, 0.47676], [-0.15137, 0.47221], [-0.17210, 0.46603], [-0.19317, 0.45814],
    [-0.21487, 0.44808], [-0.23674, 0.43539], [-0.25813, 0.42012], [-0.27884, 0.40264],
    [-0.29899, 0.38325], [-0.31870, 0.36229], [-0.33826, 0.34037], [-0.35799, 0.31819],
    [-0.37766, 0.29620], [-0.39642, 0.27462], [-0.41365, 0.25362], [-0.42962, 0.23330],
    [-0.44504, 0.21340], [-0.45997, 0.19318], [-0.47336, 0.17166], [-0.48383, 0.14819],
    [-0.49069, 0.12288], [-0.49444, 0.09661], [-0.49635, 0.07027], [-0.49745, 0.04417],
    [-0.49815, 0.01815], [-0.49855, -0.00800], [-0.49868, -0.03437], [-0.49852, -0.06089],
    [-0.49785, -0.08739], [-0.49624, -0.11356], [-0.49320, -0.13909], [-0.48823, -0.16384],
    [-0.48074, -0.18773], [-0.47014, -0.21073], [-0.45610, -0.23296], [-0.43889, -0.25465],
    [-0.41943, -0.27594], [-0.39890, -0.29664], [-0.37812, -0.31645], [-0.35725, -0.33539],
    [-0.33612, -0.35390], [-0.31466, -0.37248], [-0.29305, -0.39128], [-0.27151, -0.41000],
    [-0.25015, -0.42800], [-0.22872, -0.44436], [-0.20656, -0.45822], [-0.18302, -0.46902],
    [-0.15806, -0.47667], [-0.13230, -0.48153], [-0.10641, -0.48417], [-0.08068, -0.48519],
    [-0.05519, -0.48518], [-0.02999, -0.48479], [-0.00502, -0.48450], [0.01998, -0.48425],
    [0.04511, -0.48367], [0.07019, -0.48255], [0.09499, -0.48092], [0.11954, -0.47863],
    [0.14394, -0.47527], [0.16815, -0.47039], [0.19188, -0.46334], [0.21478, -0.45329],
    [0.23669, -0.43975], [0.25782, -0.42298], [0.27868, -0.40396], [0.29976, -0.38390],
    [0.32112, -0.36369], [0.34240, -0.34349], [0.36318, -0.32289], [0.38335, -0.30162],
    [0.40309, -0.27980], [0.42234, -0.25764], [0.44064, -0.23534], [0.45736, -0.21316],
    [0.47185, -0.19121], [0.48335, -0.16927], [0.49118, -0.14679], [0.49538, -0.12322],
    [0.49707, -0.09831], [0.49776, -0.07209], [0.49832, -0.04462], [0.49863, -0.01612],
];

/// Trace of the sixteenth catalog lens.
#[rustfmt::skip]
pub static DIGITIZED_16: [[f64; 2]; DIGITIZED_POINTS] = [
    [0.47209, -0.01805], [0.46774, 0.00719], [0.46324, 0.03093], [0.45817, 0.05333],
    [0.45255, 0.07498], [0.44682, 0.09661], [0.44129, 0.11877], [0.43552, 0.14157],
    [0.42836, 0.16457], [0.41843, 0.18682], [0.40474, 0.20707], [0.38714, 0.22445],
    [0.36633, 0.23892], [0.34338, 0.25108], [0.31928, 0.26148], [0.29489, 0.27041],
    [0.27094, 0.27804], [0.24774, 0.28456], [0.22518, 0.29013], [0.20318, 0.29501],
    [0.18204, 0.29943], [0.16214, 0.30351], [0.14343, 0.30728], [0.12556, 0.31071],
    [0.10821, 0.31380], [0.09115, 0.31652], [0.07408, 0.31886], [0.05647, 0.32087],
    [0.03743, 0.32251], [0.01620, 0.32358], [-0.00693, 0.32397], [-0.03046, 0.32366],
    [-0.05282, 0.32266], [-0.07350, 0.32087], [-0.09307, 0.31819], [-0.11248, 0.31484],
    [-0.13256, 0.31129], [-0.15365, 0.30786], [-0.17557, 0.30453], [-0.19786, 0.30094],
    [-0.22020, 0.29668], [-0.24245, 0.29154], [-0.26459, 0.28549], [-0.28668, 0.27849],
    [-0.30900, 0.27032], [-0.33171, 0.26052], [-0.35424, 0.24852], [-0.37530, 0.23394],
    [-0.39340, 0.21701], [-0.40783, 0.19850], [-0.41906, 0.17924], [-0.42826, 0.15956],
    [-0.43654, 0.13935], [-0.44450, 0.11855], [-0.45219, 0.09749], [-0.45932, 0.07653],
    [-0.46556, 0.05549], [-0.47095, 0.03377], [-0.47591, 0.01094], [-0.48075, -0.01290],
    [-0.48531, -0.03738], [-0.48930, -0.06220], [-0.49260, -0.08717], [-0.49501, -0.11221],
    [-0.49597, -0.13743], [-0.49462, -0.16296], [-0.48988, -0.18832], [-0.48074, -0.21219],
    [-0.46670, -0.23296], [-0.44819, -0.24961], [-0.42653, -0.26220], [-0.40327, -0.27169],
    [-0.37962, -0.27919], [-0.35610, -0.28548], [-0.33274, -0.29095], [-0.30945, -0.29569],
    [-0.28632, -0.29968], [-0.26375, -0.30294], [-0.24213, -0.30571], [-0.22145, -0.30830],
    [-0.20142, -0.31080], [-0.18190, -0.31313], [-0.16309, -0.31521], [-0.14516, -0.31695],
    [-0.12797, -0.31821], [-0.11093, -0.31904], [-0.09297, -0.31968], [-0.07291, -0.32046],
    [-0.05033, -0.32147], [-0.02600, -0.32238], [-0.00139, -0.32257], [0.02213, -0.32180],
    [0.04381, -0.32044], [0.06359, -0.31916], [0.08214, -0.31828], [0.10037, -0.31757],
    [0.11889, -0.31667], [0.13786, -0.31549], [0.15724, -0.31401], [0.17703, -0.31209],
    [0.19744, -0.30959], [0.21887, -0.30653], [0.24171, -0.30298], [0.26601, -0.29890],
    [0.29127, -0.29428], [0.31665, -0.28914], [0.34148, -0.28351], [0.36568, -0.27737],
    [0.38957, -0.27056], [0.41319, -0.26268], [0.43595, -0.25306], [0.45663, -0.24068],
    [0.47368, -0.22445], [0.48565, -0.20395], [0.49191, -0.17991], [0.49308, -0.15370],
    [0.49068, -0.12654], [0.48640, -0.09912], [0.48150, -0.07169], [0.47664, -0.04453],
];

#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: [&[[f64; 2]; DIGITIZED_POINTS]; 18] = [
        &DIGITIZED_1,
        &DIGITIZED_1_RAW,
        &DIGITIZED_1_SHARP,
        &DIGITIZED_2,
        &DIGITIZED_3,
        &DIGITIZED_4,
        &DIGITIZED_5,
        &DIGITIZED_6,
        &DIGITIZED_7,
        &DIGITIZED_8,
        &DIGITIZED_9,
        &DIGITIZED_10,
        &DIGITIZED_11,
        &DIGITIZED_12,
        &DIGITIZED_13,
        &DIGITIZED_14,
        &DIGITIZED_15,
        &DIGITIZED_16,
    ];

    #[test]
    fn test_tables_are_roughly_unit_sized() {
        for table in TABLES {
            let points = to_points(table);
            let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
            let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
            let width = max_x - min_x;
            assert!(width > 0.9 && width <= 1.01, "width {}", width);
        }
    }

    #[test]
    fn test_tables_have_no_repeated_neighbours() {
        for table in TABLES {
            let points = to_points(table);
            for i in 0..points.len() {
                let next = points[(i + 1) % points.len()];
                assert!(points[i].distance(next) > 1e-6);
            }
        }
    }
}
